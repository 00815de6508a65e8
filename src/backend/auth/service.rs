/**
 * Authentication Flow
 *
 * Sign-up and sign-in, each a single transition ending in an access token
 * or an error.
 *
 * # Sign-up
 *
 * 1. Hash the password (blocking pool)
 * 2. Insert the user; a uniqueness conflict becomes `CredentialsTaken`
 * 3. Issue a token for the new user
 *
 * # Sign-in
 *
 * 1. Look up the user by email
 * 2. Verify the password (blocking pool)
 * 3. Issue a token
 *
 * Unknown email and wrong password both end in `CredentialsError`. The
 * unknown-email path still runs a bcrypt verification so both failures
 * cost roughly the same time.
 */

use std::sync::Arc;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::credentials::Credentials;
use crate::backend::auth::password::{HashingError, PasswordHasher};
use crate::backend::auth::sessions::{TokenError, TokenService};
use crate::backend::auth::users::{NewUser, User, UserStore};
use crate::backend::db::StoreError;

/// Token returned by sign-up and sign-in
///
/// Serialized as-is as the `{"access_token": ...}` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
}

/// Authentication flow failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Credentials error")]
    CredentialsError,

    /// Sign-up with an email that is already registered
    #[error("Credentials taken")]
    CredentialsTaken,

    #[error(transparent)]
    Hashing(#[from] HashingError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(StoreError),
}

/// Sign-up / sign-in orchestration
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
    token_ttl: TimeDelta,
    // Verified against when the email is unknown.
    dummy_hash: Arc<str>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: Arc<TokenService>,
        hasher: PasswordHasher,
        token_ttl: TimeDelta,
    ) -> Result<Self, HashingError> {
        let dummy_hash = hasher.hash("dummy password for unknown accounts")?;
        Ok(Self {
            users,
            tokens,
            hasher,
            token_ttl,
            dummy_hash: dummy_hash.into(),
        })
    }

    /// Register a new user and return a token for it
    pub async fn sign_up(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let hasher = self.hasher;
        let password = credentials.password().to_owned();
        let password_hash = run_blocking(move || hasher.hash(&password)).await??;

        let user = self
            .users
            .create(NewUser {
                email: credentials.email().to_owned(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::Conflict => {
                    tracing::warn!("Sign-up rejected, email already registered");
                    AuthError::CredentialsTaken
                }
                other => AuthError::Store(other),
            })?;

        tracing::info!(user_id = %user.id, "User created successfully");
        self.token_for(&user)
    }

    /// Authenticate an existing user and return a fresh token
    pub async fn sign_in(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(AuthError::Store)?;

        let hasher = self.hasher;
        let password = credentials.password().to_owned();

        let Some(user) = user else {
            let dummy_hash = Arc::clone(&self.dummy_hash);
            run_blocking(move || hasher.verify(&dummy_hash, &password)).await?;
            tracing::warn!("Sign-in rejected");
            return Err(AuthError::CredentialsError);
        };

        let stored_hash = user.password_hash.clone();
        let valid = run_blocking(move || hasher.verify(&stored_hash, &password)).await?;
        if !valid {
            tracing::warn!(user_id = %user.id, "Sign-in rejected");
            return Err(AuthError::CredentialsError);
        }

        tracing::info!(user_id = %user.id, "User logged in successfully");
        self.token_for(&user)
    }

    fn token_for(&self, user: &User) -> Result<AccessToken, AuthError> {
        let access_token = self.tokens.issue(user.id, &user.email, self.token_ttl)?;
        Ok(AccessToken { access_token })
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, HashingError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| HashingError::from_join(e.to_string()))
}
