//! Application state

use std::sync::Arc;

use vouch_auth_core::AuthService;
use vouch_axum::AuthGate;
use vouch_db::{DbPool, PgUserRepository, UserRepository};

use crate::config::Config;

/// Type alias for the auth service with the concrete Postgres repository
pub type AuthServiceImpl = AuthService<PgUserRepository>;

/// Application state shared across handlers.
///
/// Generic over the user repository so tests can run the full router
/// against an in-memory implementation.
pub struct AppState<R> {
    /// Auth service for the session lifecycle
    pub auth: Arc<AuthService<R>>,
    /// Request gate verifying access tokens
    pub gate: AuthGate,
    /// Application configuration
    pub config: Arc<Config>,
    /// Database pool, used by the readiness probe when present
    pub pool: Option<DbPool>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
            gate: self.gate.clone(),
            config: Arc::clone(&self.config),
            pool: self.pool.clone(),
        }
    }
}

impl<R: UserRepository> AppState<R> {
    /// Create new application state
    pub fn new(auth: AuthService<R>, gate: AuthGate, config: Config) -> Self {
        Self {
            auth: Arc::new(auth),
            gate,
            config: Arc::new(config),
            pool: None,
        }
    }

    /// Attach the database pool for readiness checks
    pub fn with_pool(mut self, pool: DbPool) -> Self {
        self.pool = Some(pool);
        self
    }
}
