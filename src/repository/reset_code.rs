use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AuthError;
use crate::SecretString;

/// A short-lived, single-use password reset code bound to one user.
///
/// Codes are consumed, never deleted: redeeming one flips `consumed`, and an
/// expired code becomes permanently unusable while staying on record. The
/// `code` field uses `SecretString` to prevent accidental logging.
#[derive(Clone, Serialize, Deserialize)]
pub struct ResetCode {
    pub code: SecretString,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub consumed: bool,
    pub created_at: DateTime<Utc>,
}

impl ResetCode {
    /// Returns true if the code is still redeemable at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.consumed && self.expires_at > now
    }
}

impl std::fmt::Debug for ResetCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetCode")
            .field("code", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .field("consumed", &self.consumed)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Storage for password reset codes.
///
/// Implementations must provide two atomicity guarantees:
///
/// - `create_code` invalidates every prior unconsumed code for the user in
///   the same operation, so at most one code is ever active per user.
/// - `consume_code` is an atomic check-and-mark, so two concurrent
///   redemptions of the same code cannot both succeed.
///
/// A database backend gets both from conditional updates; if the store
/// cannot express those, it must serialize reset operations per user itself.
#[async_trait]
pub trait ResetCodeRepository {
    /// Persists a fresh code for `user_id`, invalidating prior unconsumed
    /// codes for that user.
    async fn create_code(
        &self,
        user_id: i64,
        code: SecretString,
        expires_at: DateTime<Utc>,
    ) -> Result<ResetCode, AuthError>;

    /// Atomically finds an unconsumed, unexpired code exactly matching
    /// `user_id` and `code`, and marks it consumed.
    ///
    /// Returns `Ok(None)` when no such code exists; the caller collapses
    /// wrong, expired, and already-used codes into one rejection.
    async fn consume_code(
        &self,
        user_id: i64,
        code: &str,
    ) -> Result<Option<ResetCode>, AuthError>;
}
