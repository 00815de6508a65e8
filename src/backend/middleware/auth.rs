/**
 * Authentication Middleware
 *
 * This module protects routes that require a signed-in user. It extracts
 * and verifies the bearer token from the Authorization header and hands the
 * caller's identity to handlers.
 *
 * # Flow
 *
 * 1. Read `Authorization: Bearer <token>` (scheme is case-insensitive)
 * 2. Verify signature and expiry with `TokenService`
 * 3. Insert `AuthenticatedUser` into the request extensions
 *
 * Any failure short-circuits with `401` before the wrapped handler runs.
 * The claims are trusted as-is; the user is not re-fetched, so a deleted
 * account keeps access until its token expires.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserId;
use crate::backend::error::ApiError;

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
}

/// Authentication middleware
///
/// Mount with `axum::middleware::from_fn_with_state` and `route_layer`.
pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::Unauthenticated
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        ApiError::Unauthenticated
    })?;

    let id = claims.subject().map_err(|e| {
        tracing::warn!("Rejected token subject: {}", e);
        ApiError::Unauthenticated
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Pull the token out of `Authorization: Bearer <token>`
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}

/// Axum extractor for the authenticated user
///
/// Only valid behind `require_auth`; elsewhere it rejects with `401`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
