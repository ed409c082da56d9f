#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::AuthError;
use crate::SecretString;

use super::reset_code::{ResetCode, ResetCodeRepository};

/// In-memory reset-code store. One mutex covers both issuance and
/// redemption, which gives the per-user atomicity the trait requires.
#[derive(Clone)]
pub struct MockResetCodeRepository {
    pub codes: Arc<Mutex<Vec<ResetCode>>>,
}

impl MockResetCodeRepository {
    pub fn new() -> Self {
        Self {
            codes: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl Default for MockResetCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResetCodeRepository for MockResetCodeRepository {
    async fn create_code(
        &self,
        user_id: i64,
        code: SecretString,
        expires_at: DateTime<Utc>,
    ) -> Result<ResetCode, AuthError> {
        let mut codes = self.codes.lock().unwrap();

        // Supersede: prior unconsumed codes for this user become unusable
        for existing in codes.iter_mut().filter(|c| c.user_id == user_id) {
            existing.consumed = true;
        }

        let record = ResetCode {
            code,
            user_id,
            expires_at,
            consumed: false,
            created_at: Utc::now(),
        };
        codes.push(record.clone());
        drop(codes);

        Ok(record)
    }

    async fn consume_code(
        &self,
        user_id: i64,
        code: &str,
    ) -> Result<Option<ResetCode>, AuthError> {
        let now = Utc::now();
        let mut codes = self.codes.lock().unwrap();

        match codes.iter_mut().find(|c| {
            c.user_id == user_id && c.code.expose_secret() == code && c.is_active(now)
        }) {
            Some(record) => {
                record.consumed = true;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }
}
