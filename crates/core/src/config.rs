//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listening port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. An empty list allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_body_bytes == 0 {
            return Err("server.max_body_bytes must be greater than 0".to_string());
        }
        if self.cors_origins.iter().any(|origin| origin.trim().is_empty()) {
            return Err("server.cors_origins must not contain empty entries".to_string());
        }
        Ok(())
    }
}

/// PostgreSQL SSL mode configuration.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PgSslMode {
    /// Disable SSL/TLS entirely.
    Disable,
    /// Prefer SSL/TLS but allow unencrypted connections (default).
    #[default]
    Prefer,
    /// Require SSL/TLS for all connections.
    Require,
}

/// Which relational backend a [`DatabaseConfig`] points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    /// SQLite database file (or `:memory:`).
    Sqlite(PathBuf),
}

/// Relational store configuration.
///
/// Either `url` or `host` + `database` must be set. A `sqlite:` URL selects
/// the SQLite backend; anything else is treated as PostgreSQL.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL. Takes precedence over individual fields.
    pub url: Option<String>,
    /// Database host.
    pub host: Option<String>,
    /// Database port (default: 5432).
    pub port: Option<u16>,
    /// Database username.
    pub username: Option<String>,
    /// Database password.
    /// WARNING: Prefer ROSTER_DATABASE__PASSWORD over storing it in the config file.
    pub password: Option<String>,
    /// Database name.
    pub database: Option<String>,
    /// SSL mode for PostgreSQL connections.
    #[serde(default)]
    pub ssl_mode: PgSslMode,
    /// Maximum connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before failing the request.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    /// PostgreSQL statement timeout in milliseconds. Unset means no limit.
    pub statement_timeout_ms: Option<u64>,
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: None,
            port: None,
            username: None,
            password: None,
            database: None,
            ssl_mode: PgSslMode::default(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            statement_timeout_ms: None,
        }
    }
}

impl DatabaseConfig {
    /// Config pointing at a SQLite file.
    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Self {
            url: Some(format!("sqlite:{}", path.into().display())),
            ..Default::default()
        }
    }

    /// Resolve the backend from the URL scheme.
    pub fn backend(&self) -> DatabaseBackend {
        match self.url.as_deref().and_then(|url| url.strip_prefix("sqlite:")) {
            Some(rest) => {
                let path = rest.trim_start_matches("//");
                let path = path.split('?').next().unwrap_or(path);
                DatabaseBackend::Sqlite(PathBuf::from(path))
            }
            None => DatabaseBackend::Postgres,
        }
    }

    /// Validate database configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_connections == 0 {
            return Err("database.max_connections must be greater than 0".to_string());
        }

        match (self.url.as_ref(), self.host.as_ref(), self.database.as_ref()) {
            (Some(url), _, _) if url.trim().is_empty() => {
                Err("database.url must not be empty".to_string())
            }
            (Some(_), _, _) => Ok(()),
            (None, Some(_), Some(_)) => Ok(()),
            (None, None, _) => Err(
                "database config requires either 'url' (or DATABASE_URL) or 'host' + 'database'"
                    .to_string(),
            ),
            (None, Some(_), None) => Err(
                "database config requires 'database' when using individual fields".to_string(),
            ),
        }
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Relational store configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Create a test configuration backed by the given SQLite file.
    ///
    /// **For testing only.**
    pub fn for_testing(sqlite_path: impl Into<PathBuf>) -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::sqlite(sqlite_path),
        }
    }

    /// Validate every section, returning the first violation.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.database.validate()
    }
}
