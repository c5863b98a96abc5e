//! Repository traits
//!
//! Define async repository interfaces for database operations. The auth
//! core consumes exactly these operations and never touches query details.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::UserRow;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>>;

    /// Find a user by email (case-sensitive exact match)
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;

    /// Replace the stored refresh token, or clear it with `None`.
    ///
    /// This is the only mutation the auth core performs after user
    /// creation. Updating a non-existent user is a no-op, which keeps
    /// logout idempotent.
    async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> DbResult<()>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub address: String,
    pub password_hash: String,
    pub role: String,
}
