use crate::crypto::{Argon2Hasher, PasswordHasher};
use crate::validators::{validate_password, validate_reset_code};
use crate::{AuthError, ResetCodeRepository, UserRepository};

pub struct ResetPasswordAction<U, R>
where
    U: UserRepository,
    R: ResetCodeRepository,
{
    user_repository: U,
    reset_repository: R,
    hasher: Argon2Hasher,
}

impl<U: UserRepository, R: ResetCodeRepository> ResetPasswordAction<U, R> {
    pub fn new(user_repository: U, reset_repository: R) -> Self {
        ResetPasswordAction {
            user_repository,
            reset_repository,
            hasher: Argon2Hasher::default(),
        }
    }

    /// Redeems a reset code and replaces the user's credential.
    ///
    /// A wrong code, an expired code, an already-consumed code, and an
    /// unknown email all fail with the same `AuthError::ResetCodeInvalid`.
    /// The distinguishing detail goes to logs only - never to the caller,
    /// which would otherwise hand guessers a progress signal.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "reset_password", skip_all, err)
    )]
    pub async fn execute(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_reset_code(code)?;
        validate_password(new_password)?;

        let user = match self.user_repository.find_user_by_email(email).await? {
            Some(user) => user,
            None => {
                log::debug!(target: "doorman", "msg=\"reset_rejected\" detail=\"unknown email\"");
                return Err(AuthError::ResetCodeInvalid);
            }
        };

        // Atomic check-and-mark: two concurrent redemptions cannot both pass
        match self.reset_repository.consume_code(user.id, code).await? {
            Some(_) => {
                let hashed = self.hasher.hash(new_password)?;
                self.user_repository.update_password(user.id, &hashed).await?;

                log::info!(target: "doorman", "msg=\"password_reset\" user_id={}", user.id);

                Ok(())
            }
            None => {
                log::debug!(
                    target: "doorman",
                    "msg=\"reset_rejected\" detail=\"no active code\" user_id={}",
                    user.id
                );
                Err(AuthError::ResetCodeInvalid)
            }
        }
    }
}
