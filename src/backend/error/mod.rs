//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and the
//! conversions that feed it.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - `ApiError` and its status mapping
//! ├── conversion.rs - Domain error conversions and `IntoResponse`
//! └── extract.rs    - `ApiJson` / `ApiPath` extractors
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bookmarks_api::backend::error::ApiError;
//!
//! async fn handler() -> Result<&'static str, ApiError> {
//!     Err(ApiError::not_found("Bookmark"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// Extractors with JSON rejections
pub mod extract;

pub use extract::{ApiJson, ApiPath};
pub use types::ApiError;
