/**
 * Server Initialization
 *
 * This module builds the Axum application from a loaded `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Build the services (`AppState`)
 * 3. Create and configure the router
 *
 * Unlike configuration loading, any failure here is fatal: the server does
 * not start without its database.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::auth::password::HashingError;
use crate::backend::db::{load_database, DatabaseError};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Startup failures after configuration has been loaded
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database initialization failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("credential hasher initialization failed: {0}")]
    Hashing(#[from] HashingError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing bookmarks API server");

    tracing::info!("Connecting to database...");
    let pool = load_database(&config.database_url, config.max_connections).await?;
    tracing::info!("Database ready");

    let app_state = AppState::new(config, pool)?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
