/**
 * API Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * | Variant            | Status | Body detail                  |
 * |--------------------|--------|------------------------------|
 * | `Validation`       | 400    | field-level message          |
 * | `Credentials`      | 400    | generic                      |
 * | `CredentialsTaken` | 403    | generic                      |
 * | `Unauthenticated`  | 401    | generic                      |
 * | `NotFound`         | 404    | resource name only           |
 * | `Internal`         | 500    | generic, cause is only logged |
 *
 * Domain errors convert into `ApiError` through the `From` impls in
 * `conversion`, so handlers propagate with `?`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input (body, path, or a single field)
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Sign-in failed; never says whether the email or the password was wrong
    #[error("Credentials error")]
    Credentials,

    /// Sign-up with an email that is already registered
    #[error("Credentials taken")]
    CredentialsTaken,

    /// Missing, malformed, expired, or forged bearer token
    #[error("Unauthorized")]
    Unauthenticated,

    /// Resource absent or owned by someone else
    #[error("{resource} not found")]
    NotFound {
        /// Kind of resource, e.g. "Bookmark"
        resource: &'static str,
    },

    /// Infrastructure failure. The detail is logged, never returned.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Credentials => StatusCode::BAD_REQUEST,
            Self::CredentialsTaken => StatusCode::FORBIDDEN,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
