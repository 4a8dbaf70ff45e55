//! Command-line arguments and logging setup.

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use graph_service_core::config::LoggingConfig;
use graph_service_core::Config;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "graph-service")]
#[command(version, about = "Graph algorithm service web backend")]
pub struct Cli {
    /// Configuration file, layered over config/default.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override http.bind_address
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Override http.port
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply flag overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref bind) = self.bind {
            info!("CLI override: http.bind_address = {}", bind);
            config.http.bind_address = bind.clone();
        }
        if let Some(port) = self.port {
            info!("CLI override: http.port = {}", port);
            config.http.port = port;
        }
    }

    /// Filter directive implied by `-v` flags, falling back to `logging.level`.
    pub fn filter_directive(&self, logging: &LoggingConfig) -> String {
        match self.verbose {
            0 => logging.level.to_lowercase(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }

    /// `RUST_LOG` when set, otherwise [`Cli::filter_directive`].
    pub fn log_filter(&self, logging: &LoggingConfig) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.filter_directive(logging)))
    }
}

/// Install the global subscriber. Logs go to stderr.
pub fn init_logging(filter: EnvFilter, logging: &LoggingConfig) {
    let builder = fmt().with_writer(io::stderr).with_env_filter(filter);
    if logging.is_compact() {
        builder.compact().init();
    } else {
        builder.init();
    }
}
