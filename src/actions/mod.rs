//! High-level authentication flows.
//!
//! Each action is a small struct generic over the repositories it needs,
//! wired up once at startup and called from route handlers. Actions own the
//! validation, hashing, and token wiring; handlers only shape HTTP.

pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;

pub use forgot_password::{ForgotPasswordAction, ForgotPasswordConfig};
pub use login::LoginAction;
pub use register::RegisterAction;
pub use reset_password::ResetPasswordAction;
