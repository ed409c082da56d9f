use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::token::Role;
use crate::AuthError;

/// The slice of a user record the authentication core touches.
///
/// The password is stored only as a salted Argon2 hash; the plaintext is
/// never persisted and the hash is never serialized outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(any(test, feature = "mocks"))]
impl AuthUser {
    pub fn mock_from_credentials(email: &str, hashed_password: &str) -> Self {
        let now = Utc::now();
        AuthUser {
            id: 1,
            email: email.to_owned(),
            hashed_password: hashed_password.to_owned(),
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mock_with_role(email: &str, role: Role) -> Self {
        let now = Utc::now();
        AuthUser {
            id: 1,
            email: email.to_owned(),
            hashed_password: "fakehashedpassword".to_owned(),
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Storage for user credential records.
///
/// `update_password` replaces the credential hash wholesale; credentials are
/// never partially mutated.
#[async_trait]
pub trait UserRepository {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<AuthUser>, AuthError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn create_user(
        &self,
        email: &str,
        hashed_password: &str,
        role: Role,
    ) -> Result<AuthUser, AuthError>;
    async fn update_password(&self, user_id: i64, hashed_password: &str)
        -> Result<(), AuthError>;
}
