//! API error handling
//!
//! JSON error bodies for requests that do not reach a handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

/// Structured JSON error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

/// API error type that converts to JSON responses
#[derive(Debug)]
pub enum ApiError {
    /// No route for the requested path
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::NotFound(path) => {
                debug!("No route for {}", path);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: format!("No route for {}", path),
                        code: "not_found",
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}
