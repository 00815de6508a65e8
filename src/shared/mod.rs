//! Shared Module
//!
//! Types and helpers that do not depend on the HTTP server: input
//! validation and the error it produces. Handlers run these checks before
//! calling into the auth, profile and bookmark services.

/// Shared error types
pub mod error;

/// Field validation helpers
pub mod validation;

pub use error::SharedError;
