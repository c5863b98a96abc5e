//! Configuration types for the auth core

use std::time::Duration;

use crate::AuthError;

/// Auth core configuration.
///
/// Loaded once at process start and passed by value to the services that
/// need it; nothing in the core reads the environment directly.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for access tokens
    pub access_secret: String,
    /// HMAC secret for refresh tokens. Must differ from the access
    /// secret: compromise of one must not allow forging the other
    /// token class.
    pub refresh_secret: String,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_ttl: Duration,
}

impl AuthConfig {
    /// Minimum allowed secret length in bytes (256 bits)
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Default access token lifetime
    pub const DEFAULT_ACCESS_TTL: Duration = Duration::from_secs(60 * 60);

    /// Default refresh token lifetime
    pub const DEFAULT_REFRESH_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    /// Create a new auth config.
    ///
    /// # Errors
    /// Returns `AuthError::Configuration` if either secret is shorter
    /// than [`Self::MIN_SECRET_LENGTH`] bytes or the two secrets are equal.
    pub fn try_new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let access_secret = access_secret.into();
        let refresh_secret = refresh_secret.into();

        for (name, secret) in [
            ("access secret", &access_secret),
            ("refresh secret", &refresh_secret),
        ] {
            if secret.len() < Self::MIN_SECRET_LENGTH {
                return Err(AuthError::Configuration(format!(
                    "{name} too short: got {} bytes, need at least {}",
                    secret.len(),
                    Self::MIN_SECRET_LENGTH
                )));
            }
        }

        if access_secret == refresh_secret {
            return Err(AuthError::Configuration(
                "access and refresh secrets must differ".to_string(),
            ));
        }

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl: Self::DEFAULT_ACCESS_TTL,
            refresh_ttl: Self::DEFAULT_REFRESH_TTL,
        })
    }

    /// Set the access token lifetime
    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    /// Set the refresh token lifetime
    pub fn with_refresh_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_ttl = ttl;
        self
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
