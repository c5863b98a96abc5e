//! Mock repositories for testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use vouch_db::{CreateUser, DbResult, UserRepository, UserRow};

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a test user directly
    #[allow(dead_code)]
    pub fn insert_user(&self, user: UserRow) {
        self.by_email.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
    }

    /// Read the stored refresh token for a user
    #[allow(dead_code)]
    pub fn stored_refresh_token(&self, id: Uuid) -> Option<String> {
        self.users
            .get(&id)
            .and_then(|row| row.value().refresh_token.clone())
    }

    /// Remove a user, cleaning up the email index
    #[allow(dead_code)]
    pub fn remove_user(&self, id: Uuid) {
        if let Some((_, user)) = self.users.remove(&id) {
            self.by_email.remove(&user.email);
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
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
            email: user.email,
            name: user.name,
            address: user.address,
            password_hash: user.password_hash,
            role: user.role,
            refresh_token: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.insert_user(row.clone());
        Ok(row)
    }

    async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> DbResult<()> {
        // Missing user is a no-op, matching UPDATE with no matching rows
        if let Some(mut user) = self.users.get_mut(&id) {
            user.refresh_token = token.map(String::from);
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_user_repo_crud() {
        let repo = MockUserRepository::new();

        let user = repo
            .create(CreateUser {
                id: Uuid::new_v4(),
                email: "test@example.com".to_string(),
                name: "Test".to_string(),
                address: "1 Test Lane".to_string(),
                password_hash: "$argon2id$stub".to_string(),
                role: "USER".to_string(),
            })
            .await
            .unwrap();

        let found = repo.find_by_id(user.id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "test@example.com");

        let found = repo.find_by_email("test@example.com").await.unwrap();
        assert!(found.is_some());

        repo.set_refresh_token(user.id, Some("tok")).await.unwrap();
        assert_eq!(repo.stored_refresh_token(user.id).as_deref(), Some("tok"));

        repo.set_refresh_token(user.id, None).await.unwrap();
        assert_eq!(repo.stored_refresh_token(user.id), None);
    }

    #[tokio::test]
    async fn test_set_refresh_token_unknown_user_is_noop() {
        let repo = MockUserRepository::new();
        repo.set_refresh_token(Uuid::new_v4(), Some("tok"))
            .await
            .unwrap();
    }
}
