//! Repository traits and data types.
//!
//! The core owns no persistence; it talks to the embedding application's
//! storage through these traits. Implement them against your database to
//! wire the flows up.
//!
//! | Trait | Description |
//! |-------|-------------|
//! | [`UserRepository`] | Credential-record read/create and password replacement |
//! | [`ResetCodeRepository`] | Reset-code issuance and atomic redemption |
//!
//! Enable the `mocks` feature for in-memory implementations useful for
//! testing: [`MockUserRepository`] and [`MockResetCodeRepository`].

mod reset_code;
mod user;

#[cfg(any(test, feature = "mocks"))]
mod reset_code_mock;
#[cfg(any(test, feature = "mocks"))]
mod user_mock;

pub use reset_code::ResetCode;
pub use reset_code::ResetCodeRepository;
pub use user::AuthUser;
pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use reset_code_mock::MockResetCodeRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_mock::MockUserRepository;
