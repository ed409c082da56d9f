use super::ValidationError;

use crate::crypto::RESET_CODE_DIGITS;

/// Checks the shape of a submitted reset code before touching storage.
///
/// This only rejects obviously malformed input; whether the code matches an
/// active record is decided at redemption and reported with a single
/// indistinguishable error.
pub fn validate_reset_code(code: &str) -> Result<(), ValidationError> {
    if code.len() != RESET_CODE_DIGITS || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::CodeInvalidFormat);
    }

    Ok(())
}
