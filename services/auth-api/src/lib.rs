//! Vouch Auth API
//!
//! HTTP authentication service for the store-rating platform:
//! registration, login, refresh-token rotation, logout, and the
//! current-user endpoint, plus health probes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use vouch_axum::authenticate;
use vouch_db::UserRepository;

use crate::state::AppState;

/// Build the service router.
///
/// `/auth/logout` and `/auth/me` sit behind the authenticate gate; the
/// credential endpoints and health probes are open.
pub fn router<R: UserRepository + 'static>(state: AppState<R>) -> Router {
    let gate = state.gate.clone();

    let protected: Router<AppState<R>> = Router::new()
        .route("/auth/logout", post(handlers::logout::<R>))
        .route("/auth/me", get(handlers::me))
        .route_layer(from_fn_with_state(gate, authenticate));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready::<R>))
        .route("/auth/register", post(handlers::register::<R>))
        .route("/auth/login", post(handlers::login::<R>))
        .route("/auth/refresh", post(handlers::refresh::<R>))
        .merge(protected)
        .with_state(state)
}
