//! Axum extractors for handler access to the authenticated identity
//!
//! Both extractors read the identity attached by the gate middleware;
//! they never verify tokens themselves.

use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use vouch_types::Identity;

use crate::context::IdentityExt;
use crate::error::GateError;

/// Extractor that requires an authenticated identity.
///
/// Rejects with 401 if [`authenticate`](crate::authenticate) did not run
/// or did not attach an identity.
///
/// ```ignore
/// async fn me(user: AuthUser) -> Json<Identity> {
///     Json(user.0)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl Deref for AuthUser {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = GateError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityExt>()
            .cloned()
            .map(|ext| Self(ext.0))
            .ok_or(GateError::Unauthenticated)
    }
}

/// Extractor for optional authentication.
///
/// Yields `None` when no identity is attached rather than failing; pair
/// with [`optional_authenticate`](crate::optional_authenticate).
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Identity>);

impl Deref for MaybeAuthUser {
    type Target = Option<Identity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<IdentityExt>()
            .cloned()
            .map(|ext| ext.0);
        Ok(Self(identity))
    }
}
