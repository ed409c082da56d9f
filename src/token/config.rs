use chrono::Duration;
use std::fmt;

use crate::AuthError;

/// Minimum required length for the signing secret in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Configuration for session token issuance and verification.
///
/// The signing secret is process-wide configuration, loaded once at startup
/// and passed in here. It is never rotated at runtime; compromising it
/// invalidates the integrity guarantee for every outstanding token.
#[derive(Clone)]
pub struct TokenConfig {
    /// Secret key used for signing tokens (HS256).
    pub(crate) secret: String,
    /// Token expiry duration. Default: 7 days.
    pub(crate) expiry: Duration,
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl TokenConfig {
    /// Creates a new token configuration with the given secret.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ConfigurationError` if the secret is shorter than
    /// 32 bytes.
    pub fn new(secret: impl Into<String>) -> Result<Self, AuthError> {
        let secret = secret.into();

        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AuthError::ConfigurationError(format!(
                "signing secret must be at least {MIN_SECRET_LENGTH} bytes, got {}",
                secret.len()
            )));
        }

        Ok(Self {
            secret,
            expiry: Duration::days(7),
        })
    }

    /// Sets the token expiry duration.
    #[must_use]
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    /// Returns the configured token expiry duration.
    pub fn expiry(&self) -> Duration {
        self.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiry_is_seven_days() {
        let config = TokenConfig::new("test-secret-32-bytes-long-key-01").unwrap();
        assert_eq!(config.expiry(), Duration::days(7));
    }

    #[test]
    fn test_secret_too_short() {
        let result = TokenConfig::new("short");
        let err = result.unwrap_err();
        assert!(
            matches!(err, AuthError::ConfigurationError(ref msg) if msg.contains("32 bytes")),
            "Expected ConfigurationError with '32 bytes' message"
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = TokenConfig::new("test-secret-32-bytes-long-key-01").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("test-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
