/**
 * Sign-in Handler
 *
 * This module implements the user authentication handler for
 * `POST /auth/sign_in`.
 *
 * # Security
 *
 * - Unknown email and wrong password return the same `400` body
 * - The sign-up password policy is not applied, so a short wrong password
 *   is an ordinary mismatch
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::Credentials;
use crate::backend::auth::handlers::types::SignInRequest;
use crate::backend::auth::service::{AccessToken, AuthService};
use crate::backend::error::{ApiError, ApiJson};

/// Sign-in handler
///
/// Returns `200 OK` with a fresh token.
pub async fn sign_in(
    State(auth): State<AuthService>,
    ApiJson(request): ApiJson<SignInRequest>,
) -> Result<Json<AccessToken>, ApiError> {
    let credentials = Credentials::for_sign_in(&request.email, &request.password)?;
    let token = auth.sign_in(credentials).await?;
    Ok(Json(token))
}
