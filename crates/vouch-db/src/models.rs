//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use vouch_types::{Identity, Role, UserId};

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub address: String,
    pub password_hash: String,
    pub role: String,
    /// Currently live refresh token; `None` once the user has logged out.
    /// Exactly one value is live per user at any time.
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }

    /// Parse the stored role, falling back to the least-privileged role
    /// if the column holds an unknown value.
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or(Role::User)
    }

    /// Build the identity payload issued into access tokens
    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id(), self.email.clone(), self.role())
    }
}
