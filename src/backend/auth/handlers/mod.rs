//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the public authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`sign_up`** - POST /auth/sign_up - User registration
//! - **`sign_in`** - POST /auth/sign_in - User authentication

/// Request types
pub mod types;

/// Sign-up handler
pub mod signup;

/// Sign-in handler
pub mod login;

pub use login::sign_in;
pub use signup::sign_up;
pub use types::{SignInRequest, SignUpRequest};
