//! Server error types and response handling

use axum::{http::StatusCode, response::IntoResponse};

/// Errors surfaced to HTTP clients
#[derive(Debug)]
pub(crate) enum ServerError {
    NotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::NotFound(path) => (StatusCode::NOT_FOUND, format!("Not found: {}", path)),
        };

        tracing::debug!("Server error: {} - {}", status, message);

        (status, message).into_response()
    }
}
