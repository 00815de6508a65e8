/**
 * Sign-up Handler
 *
 * This module implements the user registration handler for
 * `POST /auth/sign_up`.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Hash the password and create the user (`AuthService::sign_up`)
 * 3. Return a token for the new user
 *
 * # Responses
 *
 * - `201 Created` with `{"access_token": ...}`
 * - `400 Bad Request` for a malformed body, email, or password
 * - `403 Forbidden` when the email is already registered
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::credentials::Credentials;
use crate::backend::auth::handlers::types::SignUpRequest;
use crate::backend::auth::service::{AccessToken, AuthService};
use crate::backend::error::{ApiError, ApiJson};

/// Sign-up handler
///
/// # Example Request
///
/// ```http
/// POST /auth/sign_up HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "a@b.com", "password": "pw123456"}
/// ```
pub async fn sign_up(
    State(auth): State<AuthService>,
    ApiJson(request): ApiJson<SignUpRequest>,
) -> Result<(StatusCode, Json<AccessToken>), ApiError> {
    let credentials = Credentials::try_from_parts(&request.email, &request.password)?;
    let token = auth.sign_up(credentials).await?;
    Ok((StatusCode::CREATED, Json(token)))
}
