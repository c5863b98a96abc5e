//! Auth gate middleware
//!
//! Three request filters built on [`axum::middleware::from_fn_with_state`]:
//! [`authenticate`], [`optional_authenticate`], and [`authorize`]. All are
//! read-only with respect to auth state.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::context::{AuthGate, IdentityExt, RoleSet};
use crate::error::GateError;

/// Requires a valid access token to proceed with the request.
///
/// On success the verified [`Identity`](vouch_types::Identity) is attached
/// to the request extensions for [`authorize`] and the extractors. A
/// missing token and a present-but-invalid token both produce the same
/// 401 response.
///
/// ```ignore
/// use axum::middleware::from_fn_with_state;
/// use vouch_axum::{authenticate, AuthGate};
///
/// let guard = from_fn_with_state(gate, authenticate);
/// ```
pub async fn authenticate(
    State(gate): State<AuthGate>,
    mut request: Request,
    next: Next,
) -> Response {
    match gate.verify(request.headers()) {
        Ok(identity) => {
            request.extensions_mut().insert(IdentityExt(identity));
            next.run(request).await
        }
        Err(rejection) => rejection.into_response(),
    }
}

/// Like [`authenticate`], but a missing or invalid token is not an error:
/// the request proceeds with no identity attached.
///
/// Used by endpoints that personalize output when a caller happens to be
/// logged in.
pub async fn optional_authenticate(
    State(gate): State<AuthGate>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Ok(identity) = gate.verify(request.headers()) {
        request.extensions_mut().insert(IdentityExt(identity));
    }

    next.run(request).await
}

/// Requires the authenticated identity's role to be in the allowed set.
///
/// Must run inside [`authenticate`] (layer it first, so authenticate is
/// the outer middleware): a request with no attached identity is
/// rejected with 403, as is an identity whose role is outside the set.
///
/// ```ignore
/// use axum::middleware::from_fn_with_state;
/// use vouch_axum::{authorize, RoleSet};
/// use vouch_types::Role;
///
/// let admin_only = from_fn_with_state(RoleSet::of(&[Role::Admin]), authorize);
/// ```
pub async fn authorize(
    State(allowed): State<RoleSet>,
    request: Request,
    next: Next,
) -> Response {
    let Some(IdentityExt(identity)) = request.extensions().get::<IdentityExt>() else {
        return GateError::Forbidden.into_response();
    };

    if !allowed.allows(identity.role) {
        tracing::debug!(role = %identity.role, "Role not in allowed set");
        return GateError::Forbidden.into_response();
    }

    next.run(request).await
}
