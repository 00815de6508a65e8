/**
 * Profile Handlers
 *
 * `GET /users/me` and `PATCH /users`, both behind `require_auth`.
 */

use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::{User, UserId};
use crate::backend::error::{ApiError, ApiJson};
use crate::backend::middleware::AuthUser;
use crate::backend::users::service::{ProfileEdit, UserService};

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Edit profile request
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Accepted only when equal to the current email
    pub email: Option<String>,
}

/// GET /users/me
pub async fn get_me(
    State(users): State<UserService>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let profile = users.profile(user.id).await?;
    Ok(Json(profile.into()))
}

/// PATCH /users
pub async fn edit_user(
    State(users): State<UserService>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<EditUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let edit = ProfileEdit {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
    };
    let profile = users.edit(user.id, edit).await?;
    Ok(Json(profile.into()))
}
