//! Health check route, polled by the load balancer

use axum::{extract::State, Json};
use common::models::HealthResponse;
use std::sync::Arc;

use crate::state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(state.environment.health(&state.hostname))
}
