//! Routes Module
//!
//! This module assembles the HTTP router.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports
//! ├── router.rs      - `create_router`, health check, fallback, tracing
//! └── api_routes.rs  - Public and protected API routes
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
