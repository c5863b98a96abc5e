//! Gate state and credential extraction
//!
//! The [`AuthGate`] holds the shared token codec and turns request
//! headers into a verified [`Identity`]. It is read-only with respect to
//! auth state: verification is pure signature-plus-clock checking.

use std::sync::Arc;

use axum::http::{header, HeaderMap};

use vouch_auth_core::TokenCodec;
use vouch_types::{Identity, Role};

use crate::error::GateError;

/// Cookie used as the fallback access-token transport when no bearer
/// header is present
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Extension key for the identity attached to authenticated requests
#[derive(Debug, Clone)]
pub struct IdentityExt(pub Identity);

/// Shared state for the auth gate middleware
#[derive(Clone)]
pub struct AuthGate {
    codec: Arc<TokenCodec>,
}

impl AuthGate {
    /// Create a gate over the shared token codec
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Extract and verify the access token from request headers.
    ///
    /// Missing and invalid tokens collapse into the same
    /// `Unauthenticated` rejection; the distinction is logged, not
    /// surfaced.
    pub fn verify(&self, headers: &HeaderMap) -> Result<Identity, GateError> {
        let token = extract_token(headers).ok_or(GateError::Unauthenticated)?;

        self.codec.verify_access(&token).map_err(|e| {
            tracing::debug!("Access token rejected: {}", e);
            GateError::Unauthenticated
        })
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate").finish_non_exhaustive()
    }
}

/// Extract the access token from the Authorization header, falling back
/// to the `accessToken` cookie
fn extract_token(headers: &HeaderMap) -> Option<String> {
    // Bearer header is the primary transport
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    // Cookie fallback
    if let Some(cookie_header) = headers.get(header::COOKIE) {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie in cookie_str.split(';') {
                let value = cookie
                    .trim()
                    .strip_prefix(ACCESS_TOKEN_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='));
                if let Some(value) = value {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}

/// Allowed-role set for [`authorize`](crate::authorize).
///
/// Membership is exact: no role implies another, so every route names its
/// full allowed set.
#[derive(Debug, Clone, Copy)]
pub struct RoleSet(&'static [Role]);

impl RoleSet {
    /// Build a role set from a static slice
    pub const fn of(roles: &'static [Role]) -> Self {
        Self(roles)
    }

    /// Set-membership test
    pub fn allows(&self, role: Role) -> bool {
        self.0.contains(&role)
    }
}
