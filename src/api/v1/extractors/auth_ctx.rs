/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - The auth gate verifies the token and stores this in request extensions;
 *   handlers receive the type, never the raw token
 */
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::token::Claims;

/// Context attached to an authenticated request.
///
/// Typed replacement for the original's string-keyed context entries; the
/// claim set rides through as one value.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub claims: Claims,
}

impl AuthCtx {
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }
}

/// Missing extension means the route was not behind the auth gate; reject
/// rather than pretend the request is anonymous-but-allowed.
impl<S> FromRequestParts<S> for AuthCtx
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
