use chrono::{Duration, Utc};

use crate::crypto::{generate_reset_code, SecretString};
use crate::{AuthError, ResetCode, ResetCodeRepository, UserRepository};

/// Configuration for reset-code issuance.
#[derive(Debug, Clone)]
pub struct ForgotPasswordConfig {
    /// How long reset codes remain valid.
    ///
    /// Default: 10 minutes
    pub reset_code_expiry: Duration,
}

impl Default for ForgotPasswordConfig {
    fn default() -> Self {
        Self {
            reset_code_expiry: Duration::minutes(10),
        }
    }
}

pub struct ForgotPasswordAction<U, R>
where
    U: UserRepository,
    R: ResetCodeRepository,
{
    user_repository: U,
    reset_repository: R,
    config: ForgotPasswordConfig,
}

impl<U: UserRepository, R: ResetCodeRepository> ForgotPasswordAction<U, R> {
    pub fn new(user_repository: U, reset_repository: R) -> Self {
        Self::with_config(user_repository, reset_repository, ForgotPasswordConfig::default())
    }

    pub fn with_config(
        user_repository: U,
        reset_repository: R,
        config: ForgotPasswordConfig,
    ) -> Self {
        ForgotPasswordAction {
            user_repository,
            reset_repository,
            config,
        }
    }

    /// Issues a fresh 6-digit reset code for the given email.
    ///
    /// Returns `Ok(Some(code))` if a user with that email exists; issuing
    /// invalidates any prior unconsumed code for that user. Returns
    /// `Ok(None)` if no user exists - no code is created, and the caller
    /// must answer with the same generic success shape either way so the
    /// response never confirms account existence.
    ///
    /// # Security
    ///
    /// The 900,000-value code space relies on the short expiry and on the
    /// caller rate limiting request frequency; cap redemption attempts per
    /// user within the expiry window as well.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "forgot_password", skip_all, err)
    )]
    pub async fn execute(&self, email: &str) -> Result<Option<ResetCode>, AuthError> {
        let user = self.user_repository.find_user_by_email(email).await?;

        match user {
            Some(user) => {
                let code = generate_reset_code();
                let expires_at = Utc::now() + self.config.reset_code_expiry;
                let record = self
                    .reset_repository
                    .create_code(user.id, SecretString::new(code), expires_at)
                    .await?;

                log::info!(target: "doorman", "msg=\"reset_code_issued\" user_id={}", user.id);

                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthUser, MockResetCodeRepository, MockUserRepository};

    #[tokio::test]
    async fn test_forgot_password_creates_code() {
        let user_repo = MockUserRepository::new();
        let reset_repo = MockResetCodeRepository::new();

        let user = AuthUser::mock_from_credentials("user@example.com", "fakehash");
        user_repo.users.lock().unwrap().push(user.clone());

        let action = ForgotPasswordAction::new(user_repo, reset_repo);
        let code = action.execute("user@example.com").await.unwrap().unwrap();

        assert_eq!(code.user_id, user.id);
        assert_eq!(code.code.expose_secret().len(), 6);
        assert!(!code.consumed);

        // Expiry is ten minutes out
        let remaining = code.expires_at - Utc::now();
        assert!(remaining <= Duration::minutes(10));
        assert!(remaining > Duration::minutes(9));
    }

    #[tokio::test]
    async fn test_forgot_password_unknown_email_creates_nothing() {
        let user_repo = MockUserRepository::new();
        let reset_repo = MockResetCodeRepository::new();

        let action = ForgotPasswordAction::new(user_repo, reset_repo.clone());
        let result = action.execute("nonexistent@example.com").await.unwrap();

        assert!(result.is_none());
        assert!(reset_repo.codes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_forgot_password_supersedes_prior_code() {
        let user_repo = MockUserRepository::new();
        let reset_repo = MockResetCodeRepository::new();

        let user = AuthUser::mock_from_credentials("user@example.com", "fakehash");
        user_repo.users.lock().unwrap().push(user.clone());

        let action = ForgotPasswordAction::new(user_repo, reset_repo.clone());
        let first = action.execute("user@example.com").await.unwrap().unwrap();
        let second = action.execute("user@example.com").await.unwrap().unwrap();

        assert!(reset_repo
            .consume_code(user.id, first.code.expose_secret())
            .await
            .unwrap()
            .is_none());
        assert!(reset_repo
            .consume_code(user.id, second.code.expose_secret())
            .await
            .unwrap()
            .is_some());
    }
}
