//! Test server fixtures
//!
//! Each call builds a fresh app on its own `sqlite::memory:` database, so
//! tests never share rows.

use axum_test::TestServer;
use bookmarks_api::backend::auth::password::MIN_COST;
use bookmarks_api::backend::server::{create_app, AuthConfig, ServerConfig};

/// Signing secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration for an isolated in-memory server
///
/// bcrypt runs at its minimum cost to keep the suite fast.
pub fn test_config() -> ServerConfig {
    ServerConfig::new(
        "sqlite::memory:",
        AuthConfig::new(TEST_SECRET).with_bcrypt_cost(MIN_COST),
    )
}

/// Create a test server with a fresh database
pub async fn test_server() -> TestServer {
    let app = create_app(&test_config())
        .await
        .expect("Failed to create app");
    TestServer::new(app).expect("Failed to create test server")
}
