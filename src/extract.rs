//! Axum integration: request extractor and error mapping.
//!
//! Add an [`AuthorizationGate`] to your router state (via `FromRef`) and
//! take [`AuthClaims`] as a handler argument to protect a route. Role
//! requirements beyond "any authenticated identity" go through
//! [`AuthorizationGate::authorize`] inside the handler, which keeps 401 vs
//! 403 semantics intact.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::gate::AuthorizationGate;
use crate::token::Claims;
use crate::AuthError;

/// The authenticated identity claims of the requester.
///
/// Rejects with 401 when the token is missing or fails verification.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl AuthClaims {
    pub fn into_inner(self) -> Claims {
        self.0
    }

    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthClaims
where
    AuthorizationGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let gate = AuthorizationGate::from_ref(state);
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let claims = gate.authorize(header, &[]).map_err(AppError)?;
        Ok(AuthClaims(claims))
    }
}

/// JSON error body returned by [`AppError`].
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Converts `AuthError` into appropriate HTTP responses.
#[derive(Debug)]
pub struct AppError(pub AuthError);

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AuthError::Validation(_)
            | AuthError::UserAlreadyExists
            | AuthError::ResetCodeInvalid => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::NoToken | AuthError::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::PasswordHashError
            | AuthError::ConfigurationError(_)
            | AuthError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
