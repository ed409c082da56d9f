//! Stateless, signed session tokens.
//!
//! Tokens are compact three-part `header.payload.signature` strings (HS256)
//! carrying the identity claims of the bearer. The server holds no per-token
//! state: a token is valid iff its signature verifies against the process
//! secret and its expiry has not passed. There is no revocation list; role
//! changes and bans take effect on next issuance, and callers that need
//! strong consistency must re-check the live user record.
//!
//! # Example
//!
//! ```rust
//! use doorman::{Role, TokenCodec, TokenConfig};
//!
//! let config = TokenConfig::new("test-secret-32-bytes-long-key-01").unwrap();
//! let codec = TokenCodec::new(config);
//!
//! let token = codec.issue(42, "host@example.com", Role::Host).unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.user_id().unwrap(), 42);
//! assert_eq!(claims.role, Role::Host);
//! ```

mod claims;
mod codec;
mod config;

pub use claims::{Claims, Role};
pub use codec::TokenCodec;
pub use config::TokenConfig;
