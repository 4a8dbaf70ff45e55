//! Pairwise graph similarity scoring.
//!
//! Intended hosts: graph edit distance (GED) and learned scorers (SimGNN).

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::{short_type_name, AlgorithmKind, AlgorithmRegistry, FromParameters, Introspect};
use crate::error::CoreResult;
use crate::types::{Graph, Parameters};

/// A similarity score with algorithm-specific metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScore {
    pub score: f64,
    #[serde(default)]
    pub metadata: Parameters,
}

impl SimilarityScore {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            metadata: Parameters::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Parameters) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Interface for graph similarity scoring algorithms.
pub trait SimilarityScorer: Send + Sync {
    fn score(
        &self,
        graph_a: &Graph,
        graph_b: &Graph,
        parameters: Option<&Parameters>,
    ) -> CoreResult<SimilarityScore>;

    fn algorithm_name(&self) -> &str;

    fn default_parameters(&self) -> Parameters;
}

impl Introspect for dyn SimilarityScorer {
    fn parameter_defaults(&self) -> Parameters {
        self.default_parameters()
    }
}

/// Registry of similarity scorers.
pub type SimilarityRegistry = AlgorithmRegistry<dyn SimilarityScorer>;

impl AlgorithmRegistry<dyn SimilarityScorer> {
    /// Register `A` under `name`, constructed through [`FromParameters`].
    pub fn register_scorer<A>(&self, name: impl Into<String>)
    where
        A: SimilarityScorer + FromParameters + 'static,
    {
        self.register(name, short_type_name::<A>(), |parameters| {
            let scorer: Box<dyn SimilarityScorer> = Box::new(A::from_parameters(parameters)?);
            Ok(scorer)
        });
    }

    pub fn create_scorer(
        &self,
        name: &str,
        parameters: &Parameters,
    ) -> CoreResult<Box<dyn SimilarityScorer>> {
        self.create(name, parameters)
    }
}

static GLOBAL: OnceLock<Arc<SimilarityRegistry>> = OnceLock::new();

/// The process-wide similarity registry, empty until something registers.
pub fn global() -> Arc<SimilarityRegistry> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(SimilarityRegistry::new(AlgorithmKind::Similarity))))
}
