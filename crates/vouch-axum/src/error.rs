//! Error types for the auth gate

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Stable error body returned to clients: `{"status":"error","message":...}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    /// Build an error body with the fixed `"error"` status marker
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Gate rejections.
///
/// `Unauthenticated` deliberately covers both "no token" and
/// "invalid/expired token" so responses do not reveal which check failed.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// No valid access token on the request
    #[error("authentication required")]
    Unauthenticated,

    /// Identity is known but its role is not allowed here
    #[error("forbidden")]
    Forbidden,
}

impl GateError {
    /// HTTP status for this rejection
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
