//! Configuration management for the graph service.

mod sub_configs;

#[cfg(test)]
mod tests;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use sub_configs::{HttpConfig, LoggingConfig, ServerConfig, SiteConfig};

/// Environment variable selecting the environment-specific config file.
pub const ENV_VAR: &str = "GRAPH_SERVICE_ENV";

/// Prefix for per-key environment overrides, e.g. `GRAPH_SERVICE_HTTP__PORT`.
pub const ENV_PREFIX: &str = "GRAPH_SERVICE";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from files and environment.
    ///
    /// See [`Config::load_layers`] for the layer order.
    pub fn load(explicit: Option<&Path>) -> CoreResult<Self> {
        let config = Self::load_layers(explicit)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge configuration layers without validating the result.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{GRAPH_SERVICE_ENV}.toml (environment-specific)
    /// 3. `explicit`, when given (must exist)
    /// 4. Environment variables with GRAPH_SERVICE_ prefix
    ///
    /// Callers that apply further overrides call [`Config::validate`] afterwards.
    pub fn load_layers(explicit: Option<&Path>) -> CoreResult<Self> {
        let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Configuration with every section at its defaults.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        self.http.validate()?;
        self.logging.validate()?;

        if self.site.title.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "site.title must not be empty".into(),
            ));
        }

        Ok(())
    }
}
