//! Identity payload carried by access tokens

use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// Authenticated identity as encoded into an access token.
///
/// Immutable once issued: a role change on the user record only takes
/// effect when the user authenticates again and receives a fresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID
    pub id: UserId,
    /// User email
    pub email: String,
    /// Role at the time the token was issued
    pub role: Role,
}

impl Identity {
    /// Create a new identity
    pub fn new(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}
