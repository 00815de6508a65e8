//! Backend Module
//!
//! This module contains all server-side code for the bookmarks API.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Hashing, tokens, user store, sign-up / sign-in
//! - **`middleware`** - Bearer-token authentication
//! - **`users`** - Profile read and edit
//! - **`bookmarks`** - Ownership-scoped bookmark CRUD
//! - **`db`** - SQLite pool, migrations, store errors
//! - **`error`** - `ApiError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── db.rs           - Database pool and store errors
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── users/          - Profile handlers
//! ├── bookmarks/      - Bookmark handlers
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! request → `TraceLayer` → (`require_auth` on protected routes) → handler
//! → service → store → response. Handlers receive the caller explicitly via
//! the `AuthUser` extractor.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Database pool, migrations, and store errors
pub mod db;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// User profile endpoints
pub mod users;

/// Bookmark endpoints
pub mod bookmarks;

pub use error::ApiError;
pub use server::{create_app, ServerConfig};
