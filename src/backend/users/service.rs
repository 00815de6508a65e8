/**
 * Profile Service
 *
 * Read and edit the signed-in user's own profile. Email is the sign-in
 * identity and cannot be changed here: an edit may repeat the current
 * email but never replace it.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::users::{ProfilePatch, User, UserId, UserStore};
use crate::backend::db::StoreError;
use crate::shared::validation::validate_email;
use crate::shared::SharedError;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("user not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] SharedError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ProfileError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ProfileError::NotFound,
            other => ProfileError::Store(other),
        }
    }
}

/// Requested profile change, as received from the client
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn profile(&self, id: UserId) -> Result<User, ProfileError> {
        self.users.find_by_id(id).await?.ok_or(ProfileError::NotFound)
    }

    /// Update name fields; absent fields keep their value
    pub async fn edit(&self, id: UserId, edit: ProfileEdit) -> Result<User, ProfileError> {
        if let Some(email) = &edit.email {
            validate_email(email)?;
            let current = self.profile(id).await?;
            if current.email != *email {
                return Err(SharedError::validation("email", "email cannot be changed").into());
            }
        }

        let patch = ProfilePatch {
            first_name: edit.first_name,
            last_name: edit.last_name,
        };
        let user = self.users.update_profile(id, &patch).await?;
        tracing::info!(user_id = %id, "Profile updated");
        Ok(user)
    }
}
