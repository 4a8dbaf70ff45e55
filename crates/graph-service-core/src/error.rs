//! Error types for graph-service-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the crate, along with the [`CoreResult<T>`] type alias.
//!
//! # Examples
//!
//! ```rust
//! use graph_service_core::{AlgorithmKind, CoreError};
//!
//! let error = CoreError::UnknownAlgorithm {
//!     kind: AlgorithmKind::Embedding,
//!     name: "Node2Vec".to_string(),
//!     available: vec![],
//! };
//!
//! assert!(error.to_string().contains("Node2Vec"));
//! ```

use thiserror::Error;

use crate::algorithms::AlgorithmKind;

/// Top-level error type for graph-service-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No algorithm is registered under the requested name.
    ///
    /// # When This Occurs
    ///
    /// - `create` or `describe` with a name that was never registered
    /// - Using a name after it was unregistered
    #[error("Unknown {kind} algorithm: {name}. Available: {available:?}")]
    UnknownAlgorithm {
        /// Subsystem the lookup was made against
        kind: AlgorithmKind,
        /// The requested algorithm name
        name: String,
        /// Names registered at the time of the lookup, sorted
        available: Vec<String>,
    },

    /// An algorithm could not be constructed without arguments, so its
    /// metadata cannot be read back.
    #[error("Cannot describe {kind} algorithm {name}: {reason}")]
    IntrospectionFailed {
        kind: AlgorithmKind,
        name: String,
        reason: String,
    },

    /// A required parameter was not supplied.
    #[error("Missing parameter: {name}")]
    MissingParameter {
        /// Parameter key
        name: String,
    },

    /// A parameter was supplied with the wrong type or an invalid value.
    #[error("Invalid parameter: {name} - {message}")]
    InvalidParameter {
        /// Parameter key
        name: String,
        /// Description of the validation failure
        message: String,
    },

    /// A graph failed structural validation.
    ///
    /// # When This Occurs
    ///
    /// - Duplicate node ids
    /// - Edge endpoint referencing a node that does not exist
    /// - NaN or infinite edge weight
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// Vector dimension does not match the expected size.
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Dimension actually provided
        actual: usize,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An unexpected internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error variant.
    ///
    /// Used by the HTTP layer when building problem details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownAlgorithm { .. } => "unknown_algorithm",
            Self::IntrospectionFailed { .. } => "introspection_failed",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::InvalidGraph(_) => "invalid_graph",
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::ConfigError(_) => "config_error",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
