//! Integration tests
//!
//! Drive the full router (middleware, handlers, services, SQLite) through
//! `axum-test`. Every test gets its own in-memory database.

mod api;
