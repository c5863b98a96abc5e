//! Configuration for the Auth API service.

use std::time::Duration;

use vouch_auth_core::AuthConfig;

/// Auth API configuration
#[derive(Debug)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Deployment environment (`development` or `production`)
    pub environment: String,

    /// Auth core configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Signing secrets (minimum 32 bytes each, and they must differ)
        let access_secret = std::env::var("JWT_ACCESS_SECRET")
            .map_err(|_| ConfigError::Missing("JWT_ACCESS_SECRET"))?;

        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .map_err(|_| ConfigError::Missing("JWT_REFRESH_SECRET"))?;

        // Token lifetimes (default: 60 minute access, 7 day refresh)
        let access_ttl_minutes: u64 = std::env::var("ACCESS_TTL_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("ACCESS_TTL_MINUTES"))?;

        let refresh_ttl_days: u64 = std::env::var("REFRESH_TTL_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REFRESH_TTL_DAYS"))?;

        let environment =
            std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let auth = AuthConfig::try_new(access_secret, refresh_secret)
            .map_err(|e| ConfigError::Auth(e.to_string()))?
            .with_access_ttl(Duration::from_secs(access_ttl_minutes * 60))
            .with_refresh_ttl(Duration::from_secs(refresh_ttl_days * 24 * 60 * 60));

        Ok(Self {
            http_port,
            database_url,
            environment,
            auth,
        })
    }

    /// Whether cookies carry the `Secure` attribute
    pub fn cookie_secure(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    Auth(String),
}
