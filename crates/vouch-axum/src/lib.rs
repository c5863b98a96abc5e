//! Vouch Axum Integration
//!
//! Axum middleware and extractors forming the request-time auth gate.
//!
//! # Overview
//!
//! - **Middleware**: [`authenticate`] (401 on missing/invalid token),
//!   [`optional_authenticate`] (anonymous requests proceed), and
//!   [`authorize`] (403 unless the identity's role is in the allowed set)
//! - **Extractors**: [`AuthUser`] and [`MaybeAuthUser`] for handlers
//!
//! # Quick Start
//!
//! ```ignore
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use vouch_axum::{authenticate, authorize, AuthGate, AuthUser, RoleSet};
//! use vouch_types::Role;
//!
//! async fn admin_panel(user: AuthUser) -> String {
//!     format!("hello, {}", user.email)
//! }
//!
//! let app: Router<()> = Router::new()
//!     .route("/admin", get(admin_panel))
//!     // authorize runs inside authenticate, so it is layered first
//!     .route_layer(from_fn_with_state(RoleSet::of(&[Role::Admin]), authorize))
//!     .route_layer(from_fn_with_state(gate, authenticate));
//! ```

pub mod context;
pub mod error;
pub mod extractors;
pub mod layer;

pub use context::{AuthGate, IdentityExt, RoleSet, ACCESS_TOKEN_COOKIE};
pub use error::{ErrorBody, GateError};
pub use extractors::{AuthUser, MaybeAuthUser};
pub use layer::{authenticate, authorize, optional_authenticate};
