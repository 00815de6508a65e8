//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer-token authentication for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use bookmarks_api::backend::middleware::require_auth;
//!
//! let protected = protected_routes.route_layer(from_fn_with_state(tokens, require_auth));
//! ```

pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
