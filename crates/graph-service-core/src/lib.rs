//! Graph Service Core Library
//!
//! Provides the domain types, configuration and pluggable algorithm
//! subsystems behind the graph service web backend.
//!
//! # Architecture
//!
//! This crate defines:
//! - Graph and parameter types (`Graph`, `Parameters`)
//! - Algorithm interfaces (`EmbeddingGenerator`, `VectorIndex`, `SimilarityScorer`)
//! - One name-keyed registry per interface
//! - Error types and result aliases
//! - Configuration structures
//!
//! # Example
//!
//! ```
//! use graph_service_core::algorithms::AlgorithmRegistries;
//!
//! let registries = AlgorithmRegistries::new();
//! assert!(registries.embeddings.is_empty());
//! assert!(registries.search.describe("HNSW").is_err());
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use algorithms::{AlgorithmInfo, AlgorithmKind, AlgorithmRegistries, FromParameters};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use types::{Edge, Graph, Node, Parameters};
