use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::{Claims, Role, TokenConfig};
use crate::AuthError;

/// Encodes and verifies signed session tokens.
///
/// Verification is all-or-nothing: a malformed token, a bad signature, and
/// an elapsed expiry all surface as the same [`AuthError::TokenInvalid`], so
/// callers never learn which check rejected them. Partially trusted claims
/// are never returned.
#[derive(Clone)]
pub struct TokenCodec {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenCodec {
    /// Creates a new codec with the given configuration.
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues a signed token carrying the given identity.
    ///
    /// Expiry is fixed at the configured duration from now (default 7 days).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub fn issue(&self, user_id: i64, email: &str, role: Role) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + self.config.expiry;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_owned(),
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenInvalid)
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenInvalid` for every failure mode: bad
    /// structure, wrong signature, unknown role value, or elapsed expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::TokenInvalid)?;

        Ok(token_data.claims)
    }

    /// Returns the configured token expiry duration.
    pub fn expiry(&self) -> chrono::Duration {
        self.config.expiry()
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header};

    use super::*;

    fn codec_with(secret: &str) -> TokenCodec {
        TokenCodec::new(TokenConfig::new(secret).unwrap())
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let codec = codec_with("test-secret-32-bytes-long-key-01");

        let token = codec.issue(42, "user@example.com", Role::User).unwrap();
        let claims = codec.verify(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.role, Role::User);
    }

    #[test]
    fn test_token_has_three_parts() {
        let codec = codec_with("test-secret-32-bytes-long-key-02");
        let token = codec.issue(1, "user@example.com", Role::User).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_malformed_token() {
        let codec = codec_with("test-secret-32-bytes-long-key-03");

        assert_eq!(
            codec.verify("not-a-token").unwrap_err(),
            AuthError::TokenInvalid
        );
        assert_eq!(
            codec.verify("a.b.c").unwrap_err(),
            AuthError::TokenInvalid
        );
        assert_eq!(codec.verify("").unwrap_err(), AuthError::TokenInvalid);
    }

    #[test]
    fn test_wrong_secret() {
        let codec1 = codec_with("test-secret-32-bytes-long-key-04");
        let codec2 = codec_with("test-secret-32-bytes-long-key-05");

        let token = codec1.issue(42, "user@example.com", Role::User).unwrap();
        assert_eq!(codec2.verify(&token).unwrap_err(), AuthError::TokenInvalid);
    }

    #[test]
    fn test_expired_token() {
        let secret = "test-secret-32-bytes-long-key-06";
        let codec = codec_with(secret);

        // Manually create a token expired well past the validation leeway
        let claims = Claims {
            sub: "42".to_owned(),
            email: "user@example.com".to_owned(),
            role: Role::User,
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let token = jsonwebtoken::encode(&Header::default(), &claims, &encoding_key).unwrap();

        assert_eq!(codec.verify(&token).unwrap_err(), AuthError::TokenInvalid);
    }

    #[test]
    fn test_unknown_role_is_decode_failure() {
        let secret = "test-secret-32-bytes-long-key-07";
        let codec = codec_with(secret);

        #[derive(serde::Serialize)]
        struct RogueClaims {
            sub: String,
            email: String,
            role: String,
            iat: i64,
            exp: i64,
        }

        let claims = RogueClaims {
            sub: "42".to_owned(),
            email: "user@example.com".to_owned(),
            role: "superuser".to_owned(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let token = jsonwebtoken::encode(&Header::default(), &claims, &encoding_key).unwrap();

        // Correctly signed but carrying a role outside the closed set
        assert_eq!(codec.verify(&token).unwrap_err(), AuthError::TokenInvalid);
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let codec = codec_with("test-secret-32-bytes-long-key-08");
        let token = codec.issue(7, "host@example.com", Role::Host).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], "eyJzdWIiOiI5OTkifQ", parts[2]);
        assert_eq!(codec.verify(&forged).unwrap_err(), AuthError::TokenInvalid);
    }
}
