/**
 * Database Pool and Store Errors
 *
 * This module owns the SQLite connection pool, the embedded migrations and
 * the translation of `sqlx` failures into `StoreError`.
 *
 * # Store Contract
 *
 * Store adapters (`SqliteUserStore`, `SqliteBookmarkStore`) return
 * `StoreError` so the authentication and bookmark services never see a
 * database-specific error code:
 *
 * - `Conflict` - a uniqueness constraint rejected the write
 * - `NotFound` - no row matched the predicate
 * - `Other` - anything else (connection loss, bad SQL, decode failure)
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

/// Typed result of a store operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write
    #[error("record already exists")]
    Conflict,

    /// No row matched the lookup predicate
    #[error("record not found")]
    NotFound,

    /// Infrastructure failure
    #[error("store failure: {0}")]
    Other(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Self::Conflict,
            _ => Self::Other(err.to_string()),
        }
    }
}

/// Errors raised while opening the pool or applying migrations
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open the SQLite pool
///
/// File databases are created if missing. An in-memory database lives only
/// as long as its connection, so `sqlite::memory:` URLs get exactly one
/// connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created ({})", redact_url(database_url));
    Ok(pool)
}

/// Apply the embedded migrations in `migrations/`
pub async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Connect and migrate in one step
pub async fn load_database(database_url: &str, max_connections: u32) -> Result<SqlitePool, DatabaseError> {
    let pool = connect(database_url, max_connections).await?;
    migrate(&pool).await?;
    Ok(pool)
}

/// Strip query parameters (which may carry credentials) before logging.
fn redact_url(database_url: &str) -> &str {
    database_url.split('?').next().unwrap_or(database_url)
}
