//! Authentication core for the events platform.
//!
//! Everything security-sensitive lives here: password hashing, stateless
//! session tokens, single-use password reset codes, and role-gated request
//! authorization. HTTP handlers stay thin and call in through two narrow
//! contracts: "verify these credentials and issue a session token" and
//! "authorize this incoming request, optionally against a required role set".
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | Argon2 password hashing and reset-code generation |
//! | [`token`] | Signed, expiring session tokens and identity claims |
//! | [`gate`] | Bearer-token authentication and role authorization |
//! | [`actions`] | Register, login, forgot-password and reset-password flows |
//! | [`repository`] | Storage traits for user credentials and reset codes |
//! | [`validators`] | Email and password input validation |
//!
//! Enable the `axum_api` feature for an axum request extractor, and the
//! `mocks` feature for in-memory repositories useful in tests.

pub mod actions;
pub mod crypto;
#[cfg(feature = "axum_api")]
pub mod extract;
pub mod gate;
pub mod repository;
pub mod token;
pub mod validators;

pub use crypto::Argon2Hasher;
pub use crypto::PasswordHasher;
pub use crypto::SecretString;
pub use gate::Authenticator;
pub use gate::AuthorizationGate;
pub use repository::AuthUser;
pub use repository::ResetCode;
pub use repository::ResetCodeRepository;
pub use repository::UserRepository;
pub use token::Claims;
pub use token::Role;
pub use token::TokenCodec;
pub use token::TokenConfig;
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockResetCodeRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockUserRepository;

use std::fmt;

/// Every failure the authentication core can surface to a caller.
///
/// Variants are deliberately coarse where secrecy requires it: all token
/// verification failures collapse into [`AuthError::TokenInvalid`], and all
/// reset-code rejections collapse into [`AuthError::ResetCodeInvalid`], so
/// a response never tells the caller which check failed.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// A request field failed input validation.
    Validation(ValidationError),
    /// Email/password pair did not match a stored credential.
    InvalidCredentials,
    /// Registration attempted with an email that is already taken.
    UserAlreadyExists,
    /// A user record expected to exist was not found.
    UserNotFound,
    /// No bearer token was present on the request.
    NoToken,
    /// The token was malformed, signed with the wrong key, or expired.
    TokenInvalid,
    /// The identity is authenticated but lacks a required role.
    Forbidden,
    /// The reset code was wrong, expired, or already consumed.
    ResetCodeInvalid,
    /// The hashing engine failed. Treated as fatal, never as "no match".
    PasswordHashError,
    ConfigurationError(String),
    DatabaseError(String),
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(err) => write!(f, "{err}"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::UserAlreadyExists => write!(f, "User already exists"),
            AuthError::UserNotFound => write!(f, "User not found"),
            AuthError::NoToken => write!(f, "No token provided"),
            AuthError::TokenInvalid => write!(f, "Invalid or expired token"),
            AuthError::Forbidden => write!(f, "Insufficient permissions"),
            AuthError::ResetCodeInvalid => write!(f, "Invalid or expired reset code"),
            AuthError::PasswordHashError => write!(f, "Failed to hash password"),
            AuthError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            AuthError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        AuthError::Validation(err)
    }
}
