//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_ADMIN_*` environment variables, and
//! configuration files, in that order of precedence.

use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const PROGRAM_NAME: &str = "admin-backend";

/// Errors raised while loading or interpreting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configuration sources could not be merged.
    #[error("failed to load settings: {message}")]
    Load {
        /// Loader failure description.
        message: String,
    },
    /// The configured host is not an IP address.
    #[error("invalid host `{host}`: {message}")]
    InvalidHost {
        /// Offending host value.
        host: String,
        /// Parser failure description.
        message: String,
    },
}

/// Server settings for the user administration backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_ADMIN")]
pub struct AppSettings {
    /// PostgreSQL connection string; in-memory storage is used when unset.
    pub database_url: Option<String>,
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl AppSettings {
    /// Load settings from the process environment and configuration files.
    ///
    /// Command-line arguments are ignored here; the binary takes none.
    ///
    /// # Errors
    /// Returns [`SettingsError::Load`] when a source cannot be parsed.
    pub fn load_from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Return the configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Resolve the socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    ///
    /// # Examples
    /// ```
    /// use admin_backend::settings::AppSettings;
    ///
    /// let settings = AppSettings {
    ///     database_url: None,
    ///     host: Some("127.0.0.1".to_owned()),
    ///     port: Some(9000),
    ///     pool_max_size: None,
    ///     run_migrations: false,
    /// };
    /// assert_eq!(settings.bind_addr().unwrap().to_string(), "127.0.0.1:9000");
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref() {
            None => DEFAULT_HOST,
            Some(host) => host.parse().map_err(|err: std::net::AddrParseError| {
                SettingsError::InvalidHost {
                    host: host.to_owned(),
                    message: err.to_string(),
                }
            })?,
        };
        Ok(SocketAddr::new(ip, self.port()))
    }
}
