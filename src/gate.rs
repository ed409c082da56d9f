//! Request authentication and role authorization.
//!
//! Per request the flow is: `Unauthenticated -> [token present?] ->
//! Authenticated -> [role check] -> Authorized | Forbidden`, with a missing
//! or invalid token short-circuiting to a rejection. Authentication failures
//! ([`AuthError::NoToken`], [`AuthError::TokenInvalid`]) are distinct from
//! the authorization failure ([`AuthError::Forbidden`]) so callers can pick
//! 401 vs 403 semantics.

use crate::token::{Claims, Role, TokenCodec};
use crate::AuthError;

/// Strips the optional `Bearer ` prefix from an `Authorization` header value.
///
/// Both a raw token and the `Bearer <token>` form are accepted.
pub fn extract_bearer_token(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header).trim()
}

/// Turns an inbound request's `Authorization` header into authenticated
/// identity claims.
///
/// Pure read of request metadata: no storage lookups, no side effects.
#[derive(Clone)]
pub struct Authenticator {
    codec: TokenCodec,
}

impl Authenticator {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Authenticates the bearer of the given `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NoToken` if the header is absent or blank, and
    /// `AuthError::TokenInvalid` for any verification failure. The specific
    /// cryptographic or structural reason is never disclosed.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Claims, AuthError> {
        let header = authorization.ok_or(AuthError::NoToken)?;
        let token = extract_bearer_token(header);

        if token.is_empty() {
            return Err(AuthError::NoToken);
        }

        self.codec.verify(token)
    }
}

/// An [`Authenticator`] plus an optional required-role check.
///
/// Claims embedded in a token reflect the user record at issuance time.
/// Callers enforcing bans or freshly revoked roles must re-check the live
/// record; the gate alone gives eventual consistency.
#[derive(Clone)]
pub struct AuthorizationGate {
    authenticator: Authenticator,
}

impl AuthorizationGate {
    pub fn new(codec: TokenCodec) -> Self {
        Self {
            authenticator: Authenticator::new(codec),
        }
    }

    /// Authorizes a request, optionally against a required role set.
    ///
    /// An empty `required_roles` slice admits any authenticated identity.
    ///
    /// # Errors
    ///
    /// Propagates authentication failures verbatim; returns
    /// `AuthError::Forbidden` when the identity is authenticated but its
    /// role is not in `required_roles`.
    pub fn authorize(
        &self,
        authorization: Option<&str>,
        required_roles: &[Role],
    ) -> Result<Claims, AuthError> {
        let claims = self.authenticator.authenticate(authorization)?;

        if !required_roles.is_empty() && !required_roles.contains(&claims.role) {
            log::debug!(
                target: "doorman",
                "msg=\"authorization_denied\" role=\"{}\"",
                claims.role
            );
            return Err(AuthError::Forbidden);
        }

        Ok(claims)
    }

    /// Returns the wrapped authenticator.
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }
}
