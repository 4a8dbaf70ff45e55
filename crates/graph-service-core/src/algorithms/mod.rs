//! Pluggable algorithm subsystems.
//!
//! Each subsystem pairs a capability trait with a name-keyed registry:
//!
//! | Subsystem | Trait | Registry |
//! |-----------|-------|----------|
//! | Embeddings | [`EmbeddingGenerator`] | [`EmbeddingRegistry`] |
//! | Vector search | [`VectorIndex`] | [`IndexRegistry`] |
//! | Similarity | [`SimilarityScorer`] | [`SimilarityRegistry`] |
//!
//! No concrete algorithms ship with this crate. Every registry starts empty
//! and is filled by explicit registration calls, so every lookup against a
//! fresh registry fails with [`CoreError::UnknownAlgorithm`].
//!
//! # Example
//!
//! ```rust
//! use graph_service_core::algorithms::AlgorithmRegistries;
//! use graph_service_core::{CoreError, Parameters};
//!
//! let registries = AlgorithmRegistries::new();
//! let err = registries.embeddings.create_generator("Node2Vec", &Parameters::new()).err().unwrap();
//! assert!(matches!(err, CoreError::UnknownAlgorithm { .. }));
//! ```

pub mod embeddings;
mod registry;
pub mod search;
pub mod similarity;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Parameters;

pub use embeddings::{EmbeddingGenerator, EmbeddingOutput, EmbeddingRegistry, EmbeddingTarget};
pub use registry::{AlgorithmRegistry, Constructor};
pub use search::{IndexRegistry, SearchResult, VectorIndex};
pub use similarity::{SimilarityRegistry, SimilarityScore, SimilarityScorer};

/// The three algorithm subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Embedding,
    VectorIndex,
    Similarity,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] = [Self::Embedding, Self::VectorIndex, Self::Similarity];

    /// URL path segment naming this subsystem.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Embedding => "embeddings",
            Self::VectorIndex => "search",
            Self::Similarity => "similarity",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Embedding => "embedding",
            Self::VectorIndex => "vector index",
            Self::Similarity => "similarity",
        })
    }
}

impl FromStr for AlgorithmKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == s)
            .ok_or_else(|| {
                CoreError::invalid_parameter(
                    "kind",
                    format!("'{}' is not one of embeddings, search, similarity", s),
                )
            })
    }
}

/// Construction contract used by the typed registration helpers.
///
/// `describe` calls this with an empty map, so implementations that need
/// mandatory arguments cannot be introspected and should return
/// [`CoreError::MissingParameter`] rather than panic.
pub trait FromParameters: Sized {
    fn from_parameters(parameters: &Parameters) -> CoreResult<Self>;
}

/// Metadata read back from a freshly constructed instance.
pub trait Introspect {
    fn parameter_defaults(&self) -> Parameters;

    fn output_dimensions(&self) -> Option<usize> {
        None
    }
}

/// Result of [`AlgorithmRegistry::describe`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub default_parameters: Parameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_dimensions: Option<usize>,
}

/// Handles to one registry per subsystem.
#[derive(Clone)]
pub struct AlgorithmRegistries {
    pub embeddings: Arc<EmbeddingRegistry>,
    pub search: Arc<IndexRegistry>,
    pub similarity: Arc<SimilarityRegistry>,
}

impl AlgorithmRegistries {
    /// Fresh, empty registries not shared with the rest of the process.
    pub fn new() -> Self {
        Self {
            embeddings: Arc::new(EmbeddingRegistry::new(AlgorithmKind::Embedding)),
            search: Arc::new(IndexRegistry::new(AlgorithmKind::VectorIndex)),
            similarity: Arc::new(SimilarityRegistry::new(AlgorithmKind::Similarity)),
        }
    }

    /// The process-wide registries.
    pub fn global() -> Self {
        Self {
            embeddings: embeddings::global(),
            search: search::global(),
            similarity: similarity::global(),
        }
    }

    /// Name to type mapping for one subsystem.
    pub fn list(&self, kind: AlgorithmKind) -> BTreeMap<String, String> {
        match kind {
            AlgorithmKind::Embedding => self.embeddings.list(),
            AlgorithmKind::VectorIndex => self.search.list(),
            AlgorithmKind::Similarity => self.similarity.list(),
        }
    }

    pub fn describe(&self, kind: AlgorithmKind, name: &str) -> CoreResult<AlgorithmInfo> {
        match kind {
            AlgorithmKind::Embedding => self.embeddings.describe(name),
            AlgorithmKind::VectorIndex => self.search.describe(name),
            AlgorithmKind::Similarity => self.similarity.describe(name),
        }
    }
}

impl Default for AlgorithmRegistries {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AlgorithmRegistries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistries")
            .field("embeddings", &self.embeddings.names())
            .field("search", &self.search.names())
            .field("similarity", &self.similarity.names())
            .finish()
    }
}

/// Last path segment of a type name, without generic arguments.
pub(crate) fn short_type_name<A: ?Sized>() -> &'static str {
    let full = std::any::type_name::<A>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
