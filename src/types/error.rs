//! Error types for the ValGraph library.

use thiserror::Error;

/// All errors that can occur in the ValGraph library.
///
/// The default graph operations are total and never produce these; only the
/// explicit `try_*` strict variants do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint does not exist as a vertex.
    #[error("Vertex \"{0}\" not found")]
    VertexNotFound(String),
}

/// Convenience result type for ValGraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
