/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds one value per service:
 * - `AuthService` for sign-up / sign-in
 * - `Arc<TokenService>` for the authentication middleware
 * - `UserService` for profile reads and edits
 * - `BookmarkService` for ownership-scoped bookmark CRUD
 *
 * Everything is immutable after construction and cheap to clone; the
 * only shared resource underneath is the `SqlitePool`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let a handler ask for just the service it
 * needs, e.g. `State<BookmarkService>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::{HashingError, PasswordHasher};
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{SqliteUserStore, UserStore};
use crate::backend::bookmarks::db::{BookmarkStore, SqliteBookmarkStore};
use crate::backend::bookmarks::service::BookmarkService;
use crate::backend::server::config::ServerConfig;
use crate::backend::users::service::UserService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub tokens: Arc<TokenService>,
    pub users: UserService,
    pub bookmarks: BookmarkService,
}

impl AppState {
    /// Build every service on top of a migrated pool
    pub fn new(config: &ServerConfig, pool: SqlitePool) -> Result<Self, HashingError> {
        Self::from_stores(
            config,
            Arc::new(SqliteUserStore::new(pool.clone())),
            Arc::new(SqliteBookmarkStore::new(pool)),
        )
    }

    /// Build the services on top of arbitrary store implementations
    pub fn from_stores(
        config: &ServerConfig,
        users: Arc<dyn UserStore>,
        bookmarks: Arc<dyn BookmarkStore>,
    ) -> Result<Self, HashingError> {
        let tokens = Arc::new(TokenService::new(&config.auth));
        let auth = AuthService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            PasswordHasher::new(config.auth.bcrypt_cost),
            config.auth.token_ttl,
        )?;

        Ok(Self {
            auth,
            tokens,
            users: UserService::new(users),
            bookmarks: BookmarkService::new(bookmarks, config.page_size),
        })
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for BookmarkService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.bookmarks.clone()
    }
}
