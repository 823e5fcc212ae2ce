//! Service configuration sourced from the environment.

use std::env;
use std::net::SocketAddr;

/// Default listening address for the intake service.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
/// Default maximum number of pooled database connections.
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Failures encountered while reading the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `DATABASE_URL` is unset or empty.
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
    /// `BIND_ADDR` does not parse as a socket address.
    #[error("invalid BIND_ADDR: {value}")]
    InvalidBindAddr { value: String },
    /// `POOL_MAX_SIZE` does not parse as a positive integer.
    #[error("invalid POOL_MAX_SIZE: {value}")]
    InvalidPoolMaxSize { value: String },
}

/// Runtime configuration for the service process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to; defaults to `0.0.0.0:3001`.
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string for the pool and migrations.
    pub database_url: String,
    /// Upper bound on pooled connections.
    pub pool_max_size: u32,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value: raw })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|error| panic!("default bind address failed to parse: {error}")),
        };

        let pool_max_size = match lookup("POOL_MAX_SIZE") {
            Some(raw) => raw
                .parse()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPoolMaxSize { value: raw })?,
            None => DEFAULT_POOL_MAX_SIZE,
        };

        Ok(Self {
            bind_addr,
            database_url,
            pool_max_size,
        })
    }
}
