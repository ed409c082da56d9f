use crate::crypto::{Argon2Hasher, PasswordHasher};
use crate::token::Role;
use crate::validators::{validate_email, validate_password};
use crate::{AuthError, AuthUser, UserRepository};

pub struct RegisterAction<U: UserRepository> {
    user_repository: U,
    hasher: Argon2Hasher,
}

impl<U: UserRepository> RegisterAction<U> {
    pub fn new(user_repository: U) -> Self {
        RegisterAction {
            user_repository,
            hasher: Argon2Hasher::default(),
        }
    }

    /// Replaces the default hasher, e.g. with [`Argon2Hasher::production`].
    #[must_use]
    pub fn with_hasher(mut self, hasher: Argon2Hasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Creates a user with a freshly hashed credential.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` for malformed input and
    /// `AuthError::UserAlreadyExists` when the email is taken.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "register", skip_all, err))]
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthUser, AuthError> {
        validate_email(email)?;
        validate_password(password)?;

        if self
            .user_repository
            .find_user_by_email(email)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists);
        }

        let hashed = self.hasher.hash(password)?;
        let user = self.user_repository.create_user(email, &hashed, role).await?;

        log::info!(target: "doorman", "msg=\"user_registered\" user_id={}", user.id);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::ValidationError;
    use crate::MockUserRepository;

    #[tokio::test]
    async fn test_register_success() {
        let repo = MockUserRepository::new();
        let register = RegisterAction::new(repo);

        let result = register
            .execute("user@example.com", "securepassword", Role::User)
            .await;

        let user = result.unwrap();
        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.role, Role::User);
        // Stored hash is never the plaintext
        assert_ne!(user.hashed_password, "securepassword");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let repo = MockUserRepository::new();
        let register = RegisterAction::new(repo);

        register
            .execute("user@example.com", "securepassword", Role::User)
            .await
            .unwrap();

        let result = register
            .execute("user@example.com", "otherpassword", Role::User)
            .await;
        assert_eq!(result.unwrap_err(), AuthError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let repo = MockUserRepository::new();
        let register = RegisterAction::new(repo);

        let result = register.execute("notanemail", "securepassword", Role::User).await;
        assert_eq!(
            result.unwrap_err(),
            AuthError::Validation(ValidationError::EmailInvalidFormat)
        );
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let repo = MockUserRepository::new();
        let register = RegisterAction::new(repo);

        let result = register.execute("user@example.com", "short", Role::User).await;
        assert_eq!(
            result.unwrap_err(),
            AuthError::Validation(ValidationError::PasswordTooShort)
        );
    }
}
