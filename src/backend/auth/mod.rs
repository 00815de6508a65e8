//! Authentication Module
//!
//! This module handles user registration, sign-in, and the bearer tokens
//! that protect the rest of the API.
//!
//! # Architecture
//!
//! - **`credentials`** - Validated email/password pair
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issue and verification
//! - **`users`** - User model and `UserStore`
//! - **`service`** - Sign-up / sign-in flow
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Input validation for credentials
//! ├── password.rs     - Credential hasher
//! ├── sessions.rs     - Token service
//! ├── users.rs        - User model and database operations
//! ├── service.rs      - Authentication flow
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs that expire after 15 minutes
//! - Unknown email and wrong password are indistinguishable to clients

pub mod credentials;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and database operations
pub mod users;

/// Sign-up and sign-in orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::Credentials;
pub use handlers::{sign_in, sign_up};
pub use service::{AccessToken, AuthError, AuthService};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{User, UserId, UserStore};
