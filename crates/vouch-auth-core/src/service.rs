//! Auth service - ties together token issuance, password hashing, and the
//! persisted refresh-token slot
//!
//! The service is stateless apart from shared configuration: one instance
//! is constructed at process start and injected into request handlers.
//! Its only side effect is the single `refresh_token` field on the user
//! record, mutated through `UserRepository::set_refresh_token`.

use std::sync::Arc;

use uuid::Uuid;

use vouch_db::{CreateUser, UserRepository, UserRow};
use vouch_types::{Identity, Role, UserId};

use crate::crypto::constant_time_str_eq;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::AuthError;

/// Registration input
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
    pub address: String,
    /// Defaults to [`Role::User`] when not supplied
    pub role: Option<Role>,
}

/// A freshly issued access/refresh token pair
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a successful registration or login
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub identity: Identity,
    pub tokens: TokenPair,
}

/// Authentication service
///
/// The sole source of truth for "is this credential valid right now":
/// - Registration and login with slow password hashing
/// - Refresh-token rotation (single active refresh token per user)
/// - Fail-closed access token verification for the request gate
pub struct AuthService<R> {
    codec: Arc<TokenCodec>,
    hasher: PasswordHasher,
    repo: Arc<R>,
}

impl<R: UserRepository> AuthService<R> {
    /// Create a new auth service
    pub fn new(codec: Arc<TokenCodec>, repo: Arc<R>) -> Self {
        Self {
            codec,
            hasher: PasswordHasher::new(),
            repo,
        }
    }

    /// Shared handle to the token codec, for wiring the request gate
    pub fn codec(&self) -> Arc<TokenCodec> {
        Arc::clone(&self.codec)
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Register a new user.
    ///
    /// Fails with `Conflict` if the email is already present (exact,
    /// case-sensitive match). On success the user starts an authenticated
    /// session: a token pair is issued and the refresh token persisted.
    pub async fn register(&self, new_user: NewUser) -> Result<AuthSession, AuthError> {
        if self.repo.find_by_email(&new_user.email).await?.is_some() {
            return Err(AuthError::Conflict);
        }

        let password_hash = self.hasher.hash(&new_user.password).await?;
        let role = new_user.role.unwrap_or(Role::User);

        let user = self
            .repo
            .create(CreateUser {
                id: Uuid::new_v4(),
                email: new_user.email,
                name: new_user.name,
                address: new_user.address,
                password_hash,
                role: role.to_string(),
            })
            .await?;

        let identity = user.identity();
        let tokens = self.issue_session(&identity).await?;

        Ok(AuthSession { identity, tokens })
    }

    /// Authenticate with email and password.
    ///
    /// Unknown email and wrong password both return the identical
    /// `InvalidCredentials`. A successful login overwrites the stored
    /// refresh token, silently ending any previous session for this user.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let Some(user) = self.repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = user.identity();
        let tokens = self.issue_session(&identity).await?;

        Ok(AuthSession { identity, tokens })
    }

    /// Exchange a refresh token for a fresh token pair.
    ///
    /// The presented token must verify cryptographically, be unexpired,
    /// and exactly match the stored value for its user; any failure is the
    /// single `InvalidRefreshToken`. On success the stored value is
    /// replaced, so the presented token is permanently dead afterwards.
    ///
    /// Rotation is not serialized per user: two concurrent calls with the
    /// same token can both pass the stored-value check, the last write
    /// wins, and the loser's new token is rejected on its next use.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let user_id = self
            .codec
            .verify_refresh(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        let Some(user) = self.repo.find_by_id(user_id.as_uuid()).await? else {
            return Err(AuthError::InvalidRefreshToken);
        };

        if !stored_token_matches(&user, refresh_token) {
            tracing::debug!(user_id = %user_id, "Refresh token does not match stored value");
            return Err(AuthError::InvalidRefreshToken);
        }

        let identity = user.identity();
        self.issue_session(&identity).await
    }

    /// End the user's session by clearing the stored refresh token.
    ///
    /// Idempotent: logging out an already logged-out (or unknown) user
    /// succeeds.
    pub async fn logout(&self, user_id: UserId) -> Result<(), AuthError> {
        self.repo.set_refresh_token(user_id.as_uuid(), None).await?;
        Ok(())
    }

    // =========================================================================
    // Token verification
    // =========================================================================

    /// Verify an access token, returning the identity it carries.
    ///
    /// Fail-closed convenience for the request gate: any invalid, expired,
    /// or malformed token is `None`, never an error.
    pub fn verify_access_token(&self, token: &str) -> Option<Identity> {
        self.codec.verify_access(token).ok()
    }

    /// Issue a token pair and persist the refresh half (rotation write)
    async fn issue_session(&self, identity: &Identity) -> Result<TokenPair, AuthError> {
        let access_token = self.codec.issue_access(identity)?;
        let refresh_token = self.codec.issue_refresh(identity.id)?;

        self.repo
            .set_refresh_token(identity.id.as_uuid(), Some(&refresh_token))
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

/// Compare the stored refresh token against the presented one in constant
/// time. An empty slot (logged out) never matches.
fn stored_token_matches(user: &UserRow, presented: &str) -> bool {
    user.refresh_token
        .as_deref()
        .is_some_and(|stored| constant_time_str_eq(stored, presented))
}

impl<R> std::fmt::Debug for AuthService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
