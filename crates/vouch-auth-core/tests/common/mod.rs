//! Shared test helpers

pub mod mock_repos;

use std::sync::Arc;

use vouch_auth_core::{AuthConfig, AuthService, NewUser, TokenCodec};

use mock_repos::MockUserRepository;

/// Two distinct well-formed secrets for test codecs
#[allow(dead_code)]
pub fn test_config() -> AuthConfig {
    AuthConfig::try_new("a".repeat(32), "b".repeat(32)).unwrap()
}

/// Auth service over an in-memory repository
#[allow(dead_code)]
pub fn test_service() -> (AuthService<MockUserRepository>, Arc<MockUserRepository>) {
    let repo = Arc::new(MockUserRepository::new());
    let codec = Arc::new(TokenCodec::new(&test_config()));
    let service = AuthService::new(codec, Arc::clone(&repo));
    (service, repo)
}

/// Registration input with a default profile
#[allow(dead_code)]
pub fn new_user(email: &str, password: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        password: password.to_string(),
        address: "1 Test Lane".to_string(),
        role: None,
    }
}
