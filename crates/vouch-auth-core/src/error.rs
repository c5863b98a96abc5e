//! Auth errors

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email is already registered
    #[error("email already registered")]
    Conflict,

    /// Unknown email or wrong password. Both cases produce this exact
    /// variant so responses cannot be used to enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Refresh token failed verification, expired, or no longer matches
    /// the stored value (rotated or logged out)
    #[error("invalid refresh token")]
    InvalidRefreshToken,

    /// Invalid access token (malformed, bad signature, etc.)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Conflict => 400,
            Self::InvalidCredentials
            | Self::InvalidRefreshToken
            | Self::InvalidToken
            | Self::TokenExpired => 401,
            Self::Configuration(_) | Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Conflict => "CONFLICT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<vouch_db::DbError> for AuthError {
    fn from(err: vouch_db::DbError) -> Self {
        tracing::error!("Database error: {}", err);
        Self::Database(err.to_string())
    }
}
