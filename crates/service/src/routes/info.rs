use axum::{extract::State, Json};
use common::models::InfoResponse;
use std::sync::Arc;

use crate::state::AppState;

pub async fn info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(state.environment.info(&state.hostname, state.port))
}
