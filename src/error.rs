//! Error types for sqlxml.

use thiserror::Error;

/// The main error type for projection runs.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The input tree violates the node model (e.g. a required child is absent).
    #[error("Malformed AST: {0}")]
    MalformedAst(String),

    /// An extraction rule produced the same attribute twice on one element.
    #[error("Duplicate attribute '{name}' on element <{element}>")]
    DuplicateAttribute { element: String, name: String },

    /// The tree is deeper than the configured traversal limit.
    #[error("Traversal depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },

    /// The caller raised the cancellation flag while the projection was running.
    #[error("Projection cancelled")]
    Cancelled,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectionError {
    /// Create a malformed-tree error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedAst(message.into())
    }

    /// Create a duplicate attribute error.
    pub fn duplicate(element: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateAttribute {
            element: element.into(),
            name: name.into(),
        }
    }
}

/// Result type alias for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;
