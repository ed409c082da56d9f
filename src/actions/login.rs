use crate::crypto::{Argon2Hasher, PasswordHasher};
use crate::token::TokenCodec;
use crate::{AuthError, AuthUser, UserRepository};

pub struct LoginAction<U: UserRepository> {
    user_repository: U,
    codec: TokenCodec,
    hasher: Argon2Hasher,
}

impl<U: UserRepository> LoginAction<U> {
    pub fn new(user_repository: U, codec: TokenCodec) -> Self {
        LoginAction {
            user_repository,
            codec,
            hasher: Argon2Hasher::default(),
        }
    }

    /// Verifies the credentials and mints a session token.
    ///
    /// An unknown email and a wrong password both surface as
    /// `AuthError::InvalidCredentials`; the response never says which.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "login", skip_all, err))]
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(AuthUser, String), AuthError> {
        let user = self.user_repository.find_user_by_email(email).await?;

        if let Some(user) = user {
            if self.hasher.compare(password, &user.hashed_password)? {
                let token = self.codec.issue(user.id, &user.email, user.role)?;

                log::info!(target: "doorman", "msg=\"login_succeeded\" user_id={}", user.id);

                return Ok((user, token));
            }
        }

        Err(AuthError::InvalidCredentials)
    }
}
