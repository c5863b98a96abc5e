//! Stateless signing and verification of access and refresh tokens
//!
//! Access and refresh tokens are HS256 JWTs signed with two independent
//! secrets, so compromise of one secret never allows forging the other
//! token class. Verification is a pure function of signature and clock:
//! no I/O, no side effects, and a fail-closed result for any untrusted
//! input.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use vouch_types::{Identity, Role, UserId};

use crate::{AuthConfig, AuthError};

/// Claims carried by an access token. The claim set is fixed; there are
/// no optional fields.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    id: UserId,
    email: String,
    role: Role,
    iat: i64,
    exp: i64,
}

/// Claims carried by a refresh token
#[derive(Debug, Serialize, Deserialize)]
struct RefreshClaims {
    id: UserId,
    iat: i64,
    exp: i64,
}

/// Token codec handles issuance and verification of both token classes
#[derive(Clone)]
pub struct TokenCodec {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec from validated configuration
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // An expired token must fail even one second past its exp
        validation.leeway = 0;

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_ttl_secs: config.access_ttl.as_secs() as i64,
            refresh_ttl_secs: config.refresh_ttl.as_secs() as i64,
            validation,
        }
    }

    /// Issue a signed access token for the given identity
    pub fn issue_access(&self, identity: &Identity) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            id: identity.id,
            email: identity.email.clone(),
            role: identity.role,
            iat: now,
            exp: now + self.access_ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.access_encoding)
            .map_err(|e| AuthError::Internal(format!("failed to sign access token: {e}")))
    }

    /// Issue a signed refresh token for the given user
    pub fn issue_refresh(&self, user_id: UserId) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = RefreshClaims {
            id: user_id,
            iat: now,
            exp: now + self.refresh_ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.refresh_encoding)
            .map_err(|e| AuthError::Internal(format!("failed to sign refresh token: {e}")))
    }

    /// Verify an access token and return the identity it carries.
    ///
    /// Fails closed: bad signature, malformed payload, and expired `exp`
    /// all produce an error value, never a panic.
    pub fn verify_access(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<AccessClaims>(token, &self.access_decoding, &self.validation)
            .map_err(|e| {
                tracing::debug!("Access token rejected: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                }
            })?;

        let claims = data.claims;
        Ok(Identity::new(claims.id, claims.email, claims.role))
    }

    /// Verify a refresh token and return the embedded user ID.
    ///
    /// Same fail-closed contract as [`Self::verify_access`], against the
    /// independent refresh secret.
    pub fn verify_refresh(&self, token: &str) -> Result<UserId, AuthError> {
        let data = decode::<RefreshClaims>(token, &self.refresh_decoding, &self.validation)
            .map_err(|e| {
                tracing::debug!("Refresh token rejected: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                }
            })?;

        Ok(data.claims.id)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("access_ttl_secs", &self.access_ttl_secs)
            .field("refresh_ttl_secs", &self.refresh_ttl_secs)
            .finish_non_exhaustive()
    }
}
