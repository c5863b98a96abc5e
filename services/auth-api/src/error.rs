//! Error types for the Auth API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use vouch_auth_core::AuthError;
use vouch_axum::ErrorBody;

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Refresh endpoint called without its cookie
    #[error("no refresh token")]
    MissingRefreshToken,

    /// Auth core failure
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingRefreshToken => StatusCode::UNAUTHORIZED,
            Self::Auth(e) => StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal causes are logged server-side; the client only sees a
        // generic message
        let message = if status.is_server_error() {
            tracing::error!(error = ?self, "Internal API error");
            "internal error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MissingRefreshToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Auth(AuthError::Conflict).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Auth(AuthError::InvalidCredentials).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Auth(AuthError::InvalidRefreshToken).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Auth(AuthError::Internal("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
