//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ENROLLMENT_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence.

use std::ffi::OsString;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime settings for the enrollment server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENROLLMENT")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; when absent the in-memory store is used.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply pending migrations at startup when a database is configured.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Load settings from command-line arguments, the environment, and
    /// configuration files.
    ///
    /// # Errors
    /// Returns an [`std::io::Error`] describing the first source that failed
    /// to parse.
    pub fn from_args<I, T>(args: I) -> std::io::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::load_from_iter(args)
            .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))
    }

    /// Parse the configured bind address, falling back to the default.
    ///
    /// # Errors
    /// Returns the parse error when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Database URL with surrounding whitespace removed; blank means unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Whether to migrate a configured database at startup; on unless
    /// explicitly disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }
}
