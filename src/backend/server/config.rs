/**
 * Server Configuration
 *
 * This module loads startup configuration from environment variables.
 *
 * # Configuration Sources
 *
 * | Variable                   | Default                 |
 * |----------------------------|-------------------------|
 * | `JWT_SECRET`               | required                |
 * | `DATABASE_URL`             | `sqlite://bookmarks.db` |
 * | `DATABASE_MAX_CONNECTIONS` | `5`                     |
 * | `SERVER_HOST`              | `0.0.0.0`               |
 * | `SERVER_PORT`              | `3000`                  |
 * | `BCRYPT_COST`              | `bcrypt::DEFAULT_COST`  |
 *
 * # Error Handling
 *
 * A missing signing secret or an unparsable value aborts startup with a
 * `ConfigError`. The server never falls back to a built-in secret.
 */

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use chrono::TimeDelta;
use thiserror::Error;

use crate::backend::auth::password::{MAX_COST, MIN_COST};

/// Access tokens expire this long after issue.
pub const TOKEN_TTL_MINUTES: i64 = 15;

/// Bookmark listing returns at most this many items.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const DEFAULT_DATABASE_URL: &str = "sqlite://bookmarks.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Configuration failures at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingValue(&'static str),

    #[error("environment variable {name} has an invalid value: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Token and hashing settings
#[derive(Clone)]
pub struct AuthConfig {
    jwt_secret: String,
    pub token_ttl: TimeDelta,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Settings with the given secret and default TTL and cost
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: TimeDelta::minutes(TOKEN_TTL_MINUTES),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub page_size: u32,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Configuration with defaults for everything except the secret
    pub fn new(database_url: impl Into<String>, auth: AuthConfig) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            page_size: DEFAULT_PAGE_SIZE,
            auth,
        }
    }

    /// Load configuration from the process environment
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let bcrypt_cost = parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                reason: format!("must be between {MIN_COST} and {MAX_COST}"),
            });
        }

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_PORT)?,
            database_url,
            max_connections,
            page_size: DEFAULT_PAGE_SIZE,
            auth: AuthConfig::new(jwt_secret).with_bcrypt_cost(bcrypt_cost),
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                name: "SERVER_HOST",
                reason: e.to_string(),
            })
    }
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
