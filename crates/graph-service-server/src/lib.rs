//! Graph Service HTTP server.
//!
//! Serves the template-backed auth and blog pages, a read-only JSON view of
//! the algorithm registries and a health probe.
//!
//! # Example
//!
//! ```no_run
//! use graph_service_core::{AlgorithmRegistries, Config};
//! use graph_service_server::{build_router, AppState};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let state = AppState::new(Config::default_config(), AlgorithmRegistries::global());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, build_router(state)).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use error::ApiError;
pub use flash::{Flash, FlashCookie};
pub use server::{build_router, serve};
pub use state::AppState;
