use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AuthError;

/// The closed set of roles an identity can hold.
///
/// Serialized as lowercase strings inside the signed token. An unknown role
/// value in an otherwise well-formed token is a decode failure, never passed
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary platform member.
    User,
    /// Event host; may manage the events they own.
    Host,
    /// Platform administrator.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Host => write!(f, "host"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Identity claims embedded in a session token.
///
/// Claims are immutable once a token is issued; a role change only shows up
/// in tokens minted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user ID.
    pub sub: String,
    /// Email address of the bearer.
    pub email: String,
    /// Role of the bearer at issuance time.
    pub role: Role,
    /// Issued at time (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the claims.
    pub fn user_id(&self) -> Result<i64, AuthError> {
        self.sub.parse().map_err(|_| AuthError::TokenInvalid)
    }

    /// Returns true if the claims carry the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
