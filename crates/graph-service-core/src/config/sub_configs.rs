//! Sub-configuration structures for the graph service.
//!
//! This module contains the individual configuration sections that make up
//! the main `Config` structure.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Server identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,
    #[serde(default = "default_server_version")]
    pub version: String,
}

fn default_server_name() -> String {
    "graph-service".to_string()
}

fn default_server_version() -> String {
    "0.1.0".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Bind address (default: "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Listen port (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl HttpConfig {
    /// Validate the HTTP section.
    pub fn validate(&self) -> CoreResult<()> {
        if self.bind_address.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "http.bind_address must not be empty".into(),
            ));
        }
        if self.port == 0 {
            return Err(CoreError::ConfigError(
                "http.port must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse `bind_address:port` into a socket address.
    pub fn socket_addr(&self) -> CoreResult<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| {
                CoreError::ConfigError(format!(
                    "Invalid http.bind_address '{}': {}",
                    self.bind_address, e
                ))
            })
    }
}

/// Settings consumed by the page templates.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
}

fn default_site_title() -> String {
    "Graph Service".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// One of `pretty`, `compact`
    #[serde(default = "default_log_format")]
    pub format: String,
}

pub(crate) const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
pub(crate) const LOG_FORMATS: [&str; 2] = ["pretty", "compact"];

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Validate the logging section.
    pub fn validate(&self) -> CoreResult<()> {
        let level = self.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.level '{}' is invalid. Must be one of {:?}",
                self.level, LOG_LEVELS
            )));
        }
        let format = self.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.format '{}' is invalid. Must be one of {:?}",
                self.format, LOG_FORMATS
            )));
        }
        Ok(())
    }

    /// Whether the compact formatter was requested.
    pub fn is_compact(&self) -> bool {
        self.format.eq_ignore_ascii_case("compact")
    }
}
