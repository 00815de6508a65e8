//! Bookmarks API - Main Library
//!
//! An authenticated bookmarks service: users sign up with an email and a
//! password, exchange them for a short-lived bearer token, and manage a
//! private list of bookmarks.
//!
//! # Module Structure
//!
//! - **`shared`** - Input validation and the errors it raises
//! - **`backend`** - Axum server, services, and SQLite stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookmarks_api::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security Model
//!
//! - Passwords are stored as bcrypt hashes only
//! - Tokens are HS256 JWTs with a 15-minute lifetime and no revocation
//! - Every bookmark query is scoped by owner; another user's bookmark is
//!   indistinguishable from a missing one
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `thiserror` enums per layer
//! - `backend::error::ApiError` is the single HTTP-facing error

/// Shared types and validation
pub mod shared;

/// Backend server-side code
pub mod backend;
