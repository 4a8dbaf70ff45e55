//! Graph and node embedding generation.
//!
//! Intended hosts: random-walk embeddings (Node2Vec) and inductive
//! neighbourhood aggregation (GraphSAGE). Neither ships here; implementors
//! register themselves with [`global()`] or with a private
//! [`EmbeddingRegistry`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::{short_type_name, AlgorithmKind, AlgorithmRegistry, FromParameters, Introspect};
use crate::error::{CoreError, CoreResult};
use crate::types::{Graph, Parameters};

/// What the embeddings are computed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingTarget {
    /// One vector per node
    #[default]
    Nodes,
    /// One vector for the whole graph
    Graph,
    /// One vector per subgraph
    Subgraph,
}

impl EmbeddingTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Graph => "graph",
            Self::Subgraph => "subgraph",
        }
    }
}

impl fmt::Display for EmbeddingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbeddingTarget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nodes" => Ok(Self::Nodes),
            "graph" => Ok(Self::Graph),
            "subgraph" => Ok(Self::Subgraph),
            other => Err(CoreError::invalid_parameter(
                "target",
                format!("'{}' is not one of nodes, graph, subgraph", other),
            )),
        }
    }
}

/// Embeddings keyed by node (or graph/subgraph) id, plus free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingOutput {
    pub embeddings: BTreeMap<String, Vec<f32>>,
    pub dimensions: usize,
    #[serde(default)]
    pub metadata: Parameters,
}

impl EmbeddingOutput {
    pub fn new(dimensions: usize) -> Self {
        Self {
            embeddings: BTreeMap::new(),
            dimensions,
            metadata: Parameters::new(),
        }
    }

    /// Insert a vector, rejecting it if its length is not `dimensions`.
    pub fn insert(&mut self, id: impl Into<String>, vector: Vec<f32>) -> CoreResult<()> {
        if vector.len() != self.dimensions {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }
        self.embeddings.insert(id.into(), vector);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&[f32]> {
        self.embeddings.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    /// Check every vector has `dimensions` entries.
    pub fn validate(&self) -> CoreResult<()> {
        match self
            .embeddings
            .values()
            .find(|v| v.len() != self.dimensions)
        {
            Some(bad) => Err(CoreError::DimensionMismatch {
                expected: self.dimensions,
                actual: bad.len(),
            }),
            None => Ok(()),
        }
    }
}

/// Interface for graph/node embedding generation algorithms.
pub trait EmbeddingGenerator: Send + Sync {
    /// Generate embeddings for `target` within `graph`.
    ///
    /// `parameters` overrides the algorithm's defaults for this call only.
    fn generate_embeddings(
        &self,
        graph: &Graph,
        target: EmbeddingTarget,
        parameters: Option<&Parameters>,
    ) -> CoreResult<EmbeddingOutput>;

    fn algorithm_name(&self) -> &str;

    fn default_parameters(&self) -> Parameters;

    /// Length of every vector this generator produces.
    fn embedding_dimensions(&self) -> usize;
}

impl Introspect for dyn EmbeddingGenerator {
    fn parameter_defaults(&self) -> Parameters {
        self.default_parameters()
    }

    fn output_dimensions(&self) -> Option<usize> {
        Some(self.embedding_dimensions())
    }
}

/// Registry of embedding generators.
pub type EmbeddingRegistry = AlgorithmRegistry<dyn EmbeddingGenerator>;

impl AlgorithmRegistry<dyn EmbeddingGenerator> {
    /// Register `A` under `name`, constructed through [`FromParameters`].
    pub fn register_generator<A>(&self, name: impl Into<String>)
    where
        A: EmbeddingGenerator + FromParameters + 'static,
    {
        self.register(name, short_type_name::<A>(), |parameters| {
            let generator: Box<dyn EmbeddingGenerator> = Box::new(A::from_parameters(parameters)?);
            Ok(generator)
        });
    }

    pub fn create_generator(
        &self,
        name: &str,
        parameters: &Parameters,
    ) -> CoreResult<Box<dyn EmbeddingGenerator>> {
        self.create(name, parameters)
    }
}

static GLOBAL: OnceLock<Arc<EmbeddingRegistry>> = OnceLock::new();

/// The process-wide embedding registry, empty until something registers.
pub fn global() -> Arc<EmbeddingRegistry> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(EmbeddingRegistry::new(AlgorithmKind::Embedding))))
}
