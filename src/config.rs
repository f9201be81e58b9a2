//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file. Every section and field is
//! optional, so the service starts with zero configuration when no file exists.

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// Defaults
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default bind host (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default bind address, shown in the `--port` help text
pub const DEFAULT_HTTP_ADDR: &str = formatcp!("{}:{}", DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT);

/// Seconds to wait for in-flight connections on shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "jenkkuber=debug,tower_http=debug";

/// Cache-Control for the liveness probe
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for draining connections on SIGTERM/SIGINT
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// Socket address to bind. Fails if `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "http.host must be an IP address, got '{}'",
                self.host
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.http.socket_addr()?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
