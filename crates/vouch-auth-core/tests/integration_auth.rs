//! Integration tests for the session lifecycle
//!
//! These tests drive the auth service against an in-memory repository:
//! registration conflicts, credential checks, refresh-token rotation,
//! and logout idempotence.

mod common;

use common::{new_user, test_service};
use vouch_auth_core::{AuthError, NewUser};
use vouch_types::Role;

#[tokio::test]
async fn test_register_then_login() {
    let (service, _repo) = test_service();

    let registered = service
        .register(new_user("a@x.com", "Passw0rd!1"))
        .await
        .unwrap();
    assert_eq!(registered.identity.email, "a@x.com");
    assert_eq!(registered.identity.role, Role::User);

    let session = service.login("a@x.com", "Passw0rd!1").await.unwrap();
    assert_eq!(session.identity, registered.identity);

    // The decoded access token carries the stored role
    let verified = service
        .verify_access_token(&session.tokens.access_token)
        .unwrap();
    assert_eq!(verified, session.identity);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let (service, _repo) = test_service();

    service
        .register(new_user("a@x.com", "Passw0rd!1"))
        .await
        .unwrap();

    let result = service.register(new_user("a@x.com", "Other-pass2")).await;
    assert!(matches!(result, Err(AuthError::Conflict)));
}

#[tokio::test]
async fn test_register_with_explicit_role() {
    let (service, _repo) = test_service();

    let session = service
        .register(NewUser {
            role: Some(Role::Owner),
            ..new_user("owner@x.com", "Passw0rd!1")
        })
        .await
        .unwrap();
    assert_eq!(session.identity.role, Role::Owner);

    let verified = service
        .verify_access_token(&session.tokens.access_token)
        .unwrap();
    assert_eq!(verified.role, Role::Owner);
}

#[tokio::test]
async fn test_bad_login_errors_are_indistinguishable() {
    let (service, _repo) = test_service();

    service
        .register(new_user("a@x.com", "Passw0rd!1"))
        .await
        .unwrap();

    let wrong_password = service.login("a@x.com", "wrong").await.unwrap_err();
    let unknown_email = service.login("ghost@x.com", "Passw0rd!1").await.unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(wrong_password.error_code(), unknown_email.error_code());
}

#[tokio::test]
async fn test_refresh_rotates_and_rejects_replay() {
    let (service, repo) = test_service();

    let session = service
        .register(new_user("a@x.com", "Passw0rd!1"))
        .await
        .unwrap();
    let first = session.tokens;

    let second = service.refresh(&first.refresh_token).await.unwrap();
    assert_ne!(first.refresh_token, second.refresh_token);
    assert_eq!(
        repo.stored_refresh_token(session.identity.id.0).as_deref(),
        Some(second.refresh_token.as_str())
    );

    // The rotated-out token still verifies cryptographically but is dead
    let replay = service.refresh(&first.refresh_token).await;
    assert!(matches!(replay, Err(AuthError::InvalidRefreshToken)));

    // The current token keeps working
    service.refresh(&second.refresh_token).await.unwrap();
}

#[tokio::test]
async fn test_login_invalidates_previous_session() {
    let (service, _repo) = test_service();

    service
        .register(new_user("a@x.com", "Passw0rd!1"))
        .await
        .unwrap();

    let first = service.login("a@x.com", "Passw0rd!1").await.unwrap();
    let second = service.login("a@x.com", "Passw0rd!1").await.unwrap();

    // Single-active-session: the earlier refresh token was overwritten
    let replay = service.refresh(&first.tokens.refresh_token).await;
    assert!(matches!(replay, Err(AuthError::InvalidRefreshToken)));

    service.refresh(&second.tokens.refresh_token).await.unwrap();
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (service, repo) = test_service();

    let session = service
        .register(new_user("a@x.com", "Passw0rd!1"))
        .await
        .unwrap();
    let user_id = session.identity.id;

    service.logout(user_id).await.unwrap();
    assert_eq!(repo.stored_refresh_token(user_id.0), None);

    // Second logout succeeds as well
    service.logout(user_id).await.unwrap();

    // A refresh after logout is rejected even though the token is unexpired
    let result = service.refresh(&session.tokens.refresh_token).await;
    assert!(matches!(result, Err(AuthError::InvalidRefreshToken)));
}

#[tokio::test]
async fn test_refresh_rejects_garbage_and_unknown_user() {
    let (service, repo) = test_service();

    let result = service.refresh("not-a-token").await;
    assert!(matches!(result, Err(AuthError::InvalidRefreshToken)));

    // A token whose user has since disappeared is rejected the same way
    let session = service
        .register(new_user("gone@x.com", "Passw0rd!1"))
        .await
        .unwrap();
    repo.remove_user(session.identity.id.0);

    let result = service.refresh(&session.tokens.refresh_token).await;
    assert!(matches!(result, Err(AuthError::InvalidRefreshToken)));
}

#[tokio::test]
async fn test_verify_access_token_fails_closed() {
    let (service, _repo) = test_service();

    assert!(service.verify_access_token("").is_none());
    assert!(service.verify_access_token("a.b.c").is_none());

    let session = service
        .register(new_user("a@x.com", "Passw0rd!1"))
        .await
        .unwrap();

    // A refresh token is never accepted where an access token is expected
    assert!(service
        .verify_access_token(&session.tokens.refresh_token)
        .is_none());
}
