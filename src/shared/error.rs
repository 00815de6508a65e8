//! Shared Error Types
//!
//! This module defines the input errors raised before a request reaches the
//! authentication or bookmark services.
//!
//! # Error Categories
//!
//! - `ValidationError` - A single field failed validation
//! - `MalformedBody` - The request body or path could not be decoded at all
//!
//! # Usage
//!
//! ```rust
//! use bookmarks_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "invalid email format");
//! assert_eq!(error.field(), Some("email"));
//! ```
use thiserror::Error;

/// Input errors that map to a client-side `400 Bad Request`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The payload could not be decoded into the expected shape
    #[error("Malformed request: {message}")]
    MalformedBody {
        /// Decoder message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Name of the offending field, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::MalformedBody { .. } => None,
        }
    }
}
