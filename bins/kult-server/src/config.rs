//! Configuration for the Kult API server.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use kult_common::ShareSettings;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL.
    pub database_url: String,

    /// Address the REST API binds to.
    pub rest_bind: IpAddr,

    /// Port for the REST API.
    pub rest_port: u16,

    /// Upper bound on pooled database connections.
    pub max_connections: u32,

    /// How long a request waits for a pooled connection before failing.
    pub acquire_timeout: Duration,

    /// Public link and QR-code settings.
    pub share: ShareSettings,
}

impl Config {
    /// Configuration with defaults for everything but the database.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            rest_bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            rest_port: 3000,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            share: ShareSettings::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`: PostgreSQL connection string
    ///
    /// Optional:
    /// - `REST_BIND`: bind address (default: 0.0.0.0)
    /// - `REST_PORT`: REST API port (default: 3000)
    /// - `DATABASE_MAX_CONNECTIONS` (default: 10)
    /// - `DATABASE_ACQUIRE_TIMEOUT_SECS` (default: 5)
    /// - `KULT_PUBLIC_BASE_URL`, `KULT_QR_SERVICE_URL`, `KULT_QR_SIZE`
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingEnv("DATABASE_URL"))?;

        let defaults = Self::new(database_url);
        let share_defaults = ShareSettings::default();

        Ok(Self {
            rest_bind: parse_env("REST_BIND", defaults.rest_bind)?,
            rest_port: parse_env("REST_PORT", defaults.rest_port)?,
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout: Duration::from_secs(parse_env(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )?),
            share: ShareSettings {
                public_base_url: env::var("KULT_PUBLIC_BASE_URL")
                    .unwrap_or(share_defaults.public_base_url),
                qr_service_url: env::var("KULT_QR_SERVICE_URL")
                    .unwrap_or(share_defaults.qr_service_url),
                qr_size: parse_env("KULT_QR_SIZE", share_defaults.qr_size)?,
            },
            ..defaults
        })
    }

    /// REST API bind address.
    pub fn rest_addr(&self) -> SocketAddr {
        SocketAddr::new(self.rest_bind, self.rest_port)
    }
}

fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
