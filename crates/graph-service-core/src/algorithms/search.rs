//! Vector similarity search indexes.
//!
//! Intended hosts: graph-based ANN (HNSW) and inverted-file (IVF) indexes.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::{short_type_name, AlgorithmKind, AlgorithmRegistry, FromParameters, Introspect};
use crate::error::{CoreError, CoreResult};
use crate::types::Parameters;

/// Neighbour count used when a caller has no preference.
pub const DEFAULT_K: usize = 10;

/// Nearest neighbours, closest first. `ids[i]` is at `distances[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub ids: Vec<String>,
    pub distances: Vec<f32>,
}

impl SearchResult {
    /// Build from `(id, distance)` pairs, sorting by ascending distance.
    pub fn from_pairs(mut pairs: Vec<(String, f32)>) -> Self {
        pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
        let (ids, distances) = pairs.into_iter().unzip();
        Self { ids, distances }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.distances.iter().copied())
    }
}

/// Interface for vector similarity search algorithms.
pub trait VectorIndex: Send + Sync {
    /// Build the index from `vectors`, where `ids[i]` identifies `vectors[i]`.
    fn build_index(
        &mut self,
        vectors: &[Vec<f32>],
        ids: &[String],
        parameters: Option<&Parameters>,
    ) -> CoreResult<()>;

    /// Return up to `k` nearest neighbours of `query`.
    fn search(
        &self,
        query: &[f32],
        k: usize,
        parameters: Option<&Parameters>,
    ) -> CoreResult<SearchResult>;

    fn add_vector(&mut self, vector: &[f32], id: &str) -> CoreResult<()>;

    /// Returns `true` if `id` was present and removed.
    fn remove_vector(&mut self, id: &str) -> bool;

    fn algorithm_name(&self) -> &str;

    fn default_parameters(&self) -> Parameters;

    /// Number of vectors currently indexed.
    fn index_size(&self) -> usize;
}

impl Introspect for dyn VectorIndex {
    fn parameter_defaults(&self) -> Parameters {
        self.default_parameters()
    }
}

/// Check a `build_index` input and return the shared dimension.
///
/// # Errors
///
/// - `InvalidParameter` if the lengths differ, the input is empty, vectors
///   are zero-length or ids repeat
/// - `DimensionMismatch` if vectors have different lengths
pub fn validate_build_input(vectors: &[Vec<f32>], ids: &[String]) -> CoreResult<usize> {
    if vectors.len() != ids.len() {
        return Err(CoreError::invalid_parameter(
            "ids",
            format!("{} ids for {} vectors", ids.len(), vectors.len()),
        ));
    }
    let Some(first) = vectors.first() else {
        return Err(CoreError::invalid_parameter(
            "vectors",
            "at least one vector is required",
        ));
    };
    let dimensions = first.len();
    if dimensions == 0 {
        return Err(CoreError::invalid_parameter(
            "vectors",
            "vectors must not be empty",
        ));
    }
    if let Some(bad) = vectors.iter().find(|v| v.len() != dimensions) {
        return Err(CoreError::DimensionMismatch {
            expected: dimensions,
            actual: bad.len(),
        });
    }

    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(CoreError::invalid_parameter(
            "ids",
            format!("duplicate id '{}'", dup),
        ));
    }

    Ok(dimensions)
}

/// Registry of vector indexes.
pub type IndexRegistry = AlgorithmRegistry<dyn VectorIndex>;

impl AlgorithmRegistry<dyn VectorIndex> {
    /// Register `A` under `name`, constructed through [`FromParameters`].
    pub fn register_index<A>(&self, name: impl Into<String>)
    where
        A: VectorIndex + FromParameters + 'static,
    {
        self.register(name, short_type_name::<A>(), |parameters| {
            let index: Box<dyn VectorIndex> = Box::new(A::from_parameters(parameters)?);
            Ok(index)
        });
    }

    pub fn create_index(
        &self,
        name: &str,
        parameters: &Parameters,
    ) -> CoreResult<Box<dyn VectorIndex>> {
        self.create(name, parameters)
    }
}

static GLOBAL: OnceLock<Arc<IndexRegistry>> = OnceLock::new();

/// The process-wide vector index registry, empty until something registers.
pub fn global() -> Arc<IndexRegistry> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(IndexRegistry::new(AlgorithmKind::VectorIndex))))
}
