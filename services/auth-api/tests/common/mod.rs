//! Shared test helpers: an in-memory repository and a fully wired router

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use vouch_auth_api::config::Config;
use vouch_auth_api::state::AppState;
use vouch_auth_core::{AuthConfig, AuthService, TokenCodec};
use vouch_axum::AuthGate;
use vouch_db::{CreateUser, DbResult, UserRepository, UserRow};

/// In-memory user repository backing router tests
#[derive(Default, Clone)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        let row = UserRow {
            id: user.id,
            email: user.email.clone(),
            name: user.name,
            address: user.address,
            password_hash: user.password_hash,
            role: user.role,
            refresh_token: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.by_email.insert(user.email, user.id);
        self.users.insert(user.id, row.clone());
        Ok(row)
    }

    async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> DbResult<()> {
        if let Some(mut user) = self.users.get_mut(&id) {
            user.refresh_token = token.map(String::from);
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

/// Router over the in-memory repository with test secrets
pub fn test_app() -> Router {
    let repo = Arc::new(MemoryUserRepository::new());

    let auth_config = AuthConfig::try_new("a".repeat(32), "b".repeat(32)).unwrap();
    let codec = Arc::new(TokenCodec::new(&auth_config));
    let auth = AuthService::new(Arc::clone(&codec), repo);
    let gate = AuthGate::new(codec);

    let config = Config {
        http_port: 0,
        database_url: "postgres://unused".to_string(),
        environment: "development".to_string(),
        auth: auth_config,
    };

    vouch_auth_api::router(AppState::new(auth, gate, config))
}
