//! Registry contract tests against the process-wide registries.
//!
//! Every test registers under a name unique to that test because the
//! global registries are shared by all tests in this binary.

use graph_service_core::algorithms::embeddings::{self, EmbeddingGenerator, EmbeddingOutput, EmbeddingTarget};
use graph_service_core::algorithms::search::{self, SearchResult, VectorIndex};
use graph_service_core::algorithms::similarity::{self, SimilarityScore, SimilarityScorer};
use graph_service_core::{
    AlgorithmKind, AlgorithmRegistries, CoreError, CoreResult, FromParameters, Graph, Node,
    Parameters,
};

// =============================================================================
// Fixtures
// =============================================================================

struct ConstantEmbedding {
    dimensions: usize,
}

impl FromParameters for ConstantEmbedding {
    fn from_parameters(parameters: &Parameters) -> CoreResult<Self> {
        let dimensions = parameters.get_u64("dimensions")?.unwrap_or(4) as usize;
        Ok(Self { dimensions })
    }
}

impl EmbeddingGenerator for ConstantEmbedding {
    fn generate_embeddings(
        &self,
        graph: &Graph,
        _target: EmbeddingTarget,
        _parameters: Option<&Parameters>,
    ) -> CoreResult<EmbeddingOutput> {
        let mut output = EmbeddingOutput::new(self.dimensions);
        for id in graph.node_ids() {
            output.insert(id, vec![1.0; self.dimensions])?;
        }
        Ok(output)
    }

    fn algorithm_name(&self) -> &str {
        "Constant"
    }

    fn default_parameters(&self) -> Parameters {
        Parameters::new().with("dimensions", 4)
    }

    fn embedding_dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Requires `dimensions`; cannot be described without arguments.
struct SizedEmbedding(ConstantEmbedding);

impl FromParameters for SizedEmbedding {
    fn from_parameters(parameters: &Parameters) -> CoreResult<Self> {
        let dimensions = parameters.require_u64("dimensions")? as usize;
        Ok(Self(ConstantEmbedding { dimensions }))
    }
}

impl EmbeddingGenerator for SizedEmbedding {
    fn generate_embeddings(
        &self,
        graph: &Graph,
        target: EmbeddingTarget,
        parameters: Option<&Parameters>,
    ) -> CoreResult<EmbeddingOutput> {
        self.0.generate_embeddings(graph, target, parameters)
    }

    fn algorithm_name(&self) -> &str {
        "Sized"
    }

    fn default_parameters(&self) -> Parameters {
        Parameters::new()
    }

    fn embedding_dimensions(&self) -> usize {
        self.0.dimensions
    }
}

#[derive(Default)]
struct EmptyIndex;

impl FromParameters for EmptyIndex {
    fn from_parameters(_parameters: &Parameters) -> CoreResult<Self> {
        Ok(Self)
    }
}

impl VectorIndex for EmptyIndex {
    fn build_index(&mut self, _: &[Vec<f32>], _: &[String], _: Option<&Parameters>) -> CoreResult<()> {
        Ok(())
    }

    fn search(&self, _: &[f32], _: usize, _: Option<&Parameters>) -> CoreResult<SearchResult> {
        Ok(SearchResult::default())
    }

    fn add_vector(&mut self, _: &[f32], _: &str) -> CoreResult<()> {
        Ok(())
    }

    fn remove_vector(&mut self, _: &str) -> bool {
        false
    }

    fn algorithm_name(&self) -> &str {
        "Empty"
    }

    fn default_parameters(&self) -> Parameters {
        Parameters::new().with("k", search::DEFAULT_K as u64)
    }

    fn index_size(&self) -> usize {
        0
    }
}

struct AlwaysSame;

impl FromParameters for AlwaysSame {
    fn from_parameters(_parameters: &Parameters) -> CoreResult<Self> {
        Ok(Self)
    }
}

impl SimilarityScorer for AlwaysSame {
    fn score(&self, _: &Graph, _: &Graph, _: Option<&Parameters>) -> CoreResult<SimilarityScore> {
        Ok(SimilarityScore::new(1.0))
    }

    fn algorithm_name(&self) -> &str {
        "AlwaysSame"
    }

    fn default_parameters(&self) -> Parameters {
        Parameters::new()
    }
}

// =============================================================================
// Unregistered names
// =============================================================================

#[test]
fn unregistered_names_fail_create_and_describe_naming_the_algorithm() {
    let registries = AlgorithmRegistries::global();

    for name in ["Node2Vec", "GraphSAGE", "weird name with spaces", ""] {
        let err = registries
            .embeddings
            .create_generator(name, &Parameters::new())
            .err()
            .expect("unregistered embedding must fail");
        assert!(matches!(err, CoreError::UnknownAlgorithm { name: ref n, .. } if n == name));

        let err = registries.embeddings.describe(name).unwrap_err();
        assert!(matches!(err, CoreError::UnknownAlgorithm { name: ref n, .. } if n == name));
    }

    for name in ["HNSW", "IVF"] {
        let err = registries.search.create_index(name, &Parameters::new()).err().unwrap();
        assert!(err.to_string().starts_with(&format!("Unknown vector index algorithm: {name}.")));
        assert!(registries.search.describe(name).is_err());
    }

    for name in ["GED", "SimGNN"] {
        let err = registries.similarity.create_scorer(name, &Parameters::new()).err().unwrap();
        assert!(err.to_string().starts_with(&format!("Unknown similarity algorithm: {name}.")));
        assert!(registries.similarity.describe(name).is_err());
    }
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn registered_embedding_is_created_listed_and_described() {
    let registry = embeddings::global();
    registry.register_generator::<ConstantEmbedding>("contract-constant");

    let generator = registry
        .create_generator("contract-constant", &Parameters::new().with("dimensions", 2))
        .unwrap();
    assert_eq!(generator.algorithm_name(), "Constant");
    assert_eq!(generator.embedding_dimensions(), 2);

    let graph = Graph::new().with_node(Node::new("n1")).with_node(Node::new("n2"));
    let output = generator
        .generate_embeddings(&graph, EmbeddingTarget::Nodes, None)
        .unwrap();
    assert_eq!(output.len(), 2);
    assert_eq!(output.get("n1"), Some(&[1.0f32, 1.0][..]));

    assert_eq!(
        registry.list().get("contract-constant").map(String::as_str),
        Some("ConstantEmbedding")
    );

    let info = registry.describe("contract-constant").unwrap();
    assert_eq!(info.embedding_dimensions, Some(4));
    assert_eq!(info.default_parameters.get_u64("dimensions").unwrap(), Some(4));
}

#[test]
fn registered_index_and_scorer_are_created_and_listed() {
    search::global().register_index::<EmptyIndex>("contract-empty");
    similarity::global().register_scorer::<AlwaysSame>("contract-same");

    let registries = AlgorithmRegistries::global();

    let index = registries.search.create_index("contract-empty", &Parameters::new()).unwrap();
    assert_eq!(index.index_size(), 0);
    assert!(index.search(&[0.0], search::DEFAULT_K, None).unwrap().is_empty());
    assert!(registries.list(AlgorithmKind::VectorIndex).contains_key("contract-empty"));

    let scorer = registries.similarity.create_scorer("contract-same", &Parameters::new()).unwrap();
    let score = scorer.score(&Graph::new(), &Graph::new(), None).unwrap();
    assert_eq!(score.score, 1.0);
    assert_eq!(
        registries.list(AlgorithmKind::Similarity).get("contract-same").map(String::as_str),
        Some("AlwaysSame")
    );
}

#[test]
fn last_registration_wins() {
    let registry = embeddings::global();
    registry.register_generator::<SizedEmbedding>("contract-overwrite");
    registry.register_generator::<ConstantEmbedding>("contract-overwrite");

    let generator = registry
        .create_generator("contract-overwrite", &Parameters::new())
        .unwrap();
    assert_eq!(generator.algorithm_name(), "Constant");
    assert_eq!(registry.list()["contract-overwrite"], "ConstantEmbedding");
}

#[test]
fn describe_fails_for_algorithm_requiring_arguments() {
    let registry = embeddings::global();
    registry.register_generator::<SizedEmbedding>("contract-sized");

    assert!(registry
        .create_generator("contract-sized", &Parameters::new().with("dimensions", 8))
        .is_ok());

    let err = registry.describe("contract-sized").unwrap_err();
    match err {
        CoreError::IntrospectionFailed { kind, name, reason } => {
            assert_eq!(kind, AlgorithmKind::Embedding);
            assert_eq!(name, "contract-sized");
            assert!(reason.contains("dimensions"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn fresh_registries_do_not_see_global_registrations() {
    embeddings::global().register_generator::<ConstantEmbedding>("contract-isolation");

    let fresh = AlgorithmRegistries::new();
    assert!(!fresh.embeddings.contains("contract-isolation"));
    assert!(AlgorithmRegistries::global().embeddings.contains("contract-isolation"));
}
