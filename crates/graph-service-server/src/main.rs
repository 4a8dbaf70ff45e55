//! Graph Service binary.
//!
//! ```text
//! graph-service [--config PATH] [--bind ADDR] [--port PORT] [-v...]
//! ```

use anyhow::Context;
use clap::Parser;
use graph_service_core::{AlgorithmKind, AlgorithmRegistries, Config};
use graph_service_server::cli::{init_logging, Cli};
use graph_service_server::{serve, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        Config::load_layers(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(cli.log_filter(&config.logging), &config.logging);

    info!("{} v{} starting", config.server.name, config.server.version);
    if let Some(ref path) = cli.config {
        info!("Loaded configuration from: {:?}", path);
    }

    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    let registries = AlgorithmRegistries::global();
    for kind in AlgorithmKind::ALL {
        info!("{} registry: {} algorithm(s)", kind, registries.list(kind).len());
    }

    serve(AppState::new(config, registries)).await
}
