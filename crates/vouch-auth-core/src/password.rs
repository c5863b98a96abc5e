//! Password hashing and verification using Argon2id
//!
//! Hashing runs on the blocking thread pool so request tasks only await;
//! the work factor makes inline hashing a scheduler hazard.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier};

use crate::AuthError;

/// Password hashing and verification service
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the default Argon2id parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a password with a fresh random salt.
    ///
    /// Returns a PHC string containing algorithm, parameters, salt, and
    /// hash, suitable for long-term storage.
    pub async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| {
                    tracing::error!("Password hashing failed: {}", e);
                    AuthError::Internal("password hashing failed".to_string())
                })
        })
        .await
        .map_err(|e| AuthError::Internal(format!("hashing task failed: {e}")))?
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// A wrong password returns `Ok(false)`; a malformed stored hash is an
    /// internal error, since it means the record was corrupted.
    pub async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, AuthError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&stored_hash).map_err(|e| {
                tracing::error!("Stored password hash is malformed: {}", e);
                AuthError::Internal("stored password hash is malformed".to_string())
            })?;

            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(AuthError::Internal(format!(
                    "password verification failed: {e}"
                ))),
            }
        })
        .await
        .map_err(|e| AuthError::Internal(format!("verification task failed: {e}")))?
    }
}
