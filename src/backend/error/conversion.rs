/**
 * Error Conversion
 *
 * This module converts domain errors into `ApiError` and `ApiError` into an
 * HTTP response.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::service::AuthError;
use crate::backend::bookmarks::service::BookmarkError;
use crate::backend::db::StoreError;
use crate::backend::error::types::ApiError;
use crate::backend::users::service::ProfileError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal(detail) = &self {
            tracing::error!("Request failed: {}", detail);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::CredentialsError => ApiError::Credentials,
            AuthError::CredentialsTaken => ApiError::CredentialsTaken,
            other => ApiError::internal(other.to_string()),
        }
    }
}

impl From<BookmarkError> for ApiError {
    fn from(err: BookmarkError) -> Self {
        match err {
            BookmarkError::NotFound => ApiError::not_found("Bookmark"),
            BookmarkError::Invalid(e) => ApiError::Validation(e),
            BookmarkError::Store(e) => e.into(),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound => ApiError::not_found("User"),
            ProfileError::Invalid(e) => ApiError::Validation(e),
            ProfileError::Store(e) => e.into(),
        }
    }
}
