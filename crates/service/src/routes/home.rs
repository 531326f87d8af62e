//! Landing route

use axum::{extract::State, Json};
use common::models::HomeResponse;
use std::sync::Arc;

use crate::state::AppState;

/// Announce which environment is serving
pub async fn home(State(state): State<Arc<AppState>>) -> Json<HomeResponse> {
    Json(state.environment.home(&state.hostname))
}
