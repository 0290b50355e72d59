use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;

/// Which [`TodoStore`](todo_db::store::TodoStore) implementation to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via a sqlx pool.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local document store. Data is lost on restart.
    Memory,
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Postgres { .. } => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

/// Errors raised while reading configuration. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("DATABASE_URL must be set when STORE_BACKEND is postgres")]
    MissingDatabaseUrl,

    #[error("Unknown STORE_BACKEND {0:?} (expected \"postgres\" or \"memory\")")]
    UnknownBackend(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Storage backend and its connection settings.
    pub store: StoreBackend,
    /// The single origin allowed by CORS.
    pub cors_origin: HeaderValue,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `4000`                     |
    /// | `STORE_BACKEND`        | `postgres`                 |
    /// | `DATABASE_URL`         | required for postgres      |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `CORS_ORIGIN`          | `http://localhost:5174`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST", "IP address", "0.0.0.0")?;
        let port = parse_var(&lookup, "PORT", "u16", "4000")?;
        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64", "30")?;

        let backend = lookup("STORE_BACKEND").unwrap_or_else(|| "postgres".into());
        let store = match backend.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => {
                let database_url = lookup("DATABASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::MissingDatabaseUrl)?;
                let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", "u32", "20")?;
                StoreBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            "memory" => StoreBackend::Memory,
            _ => return Err(ConfigError::UnknownBackend(backend)),
        };

        let origin = lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5174".into());
        let cors_origin = HeaderValue::from_str(origin.trim()).map_err(|_| ConfigError::Invalid {
            var: "CORS_ORIGIN",
            expected: "header value",
            value: origin.clone(),
        })?;

        Ok(Self {
            host,
            port,
            store,
            cors_origin,
            request_timeout_secs,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T, F>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}
