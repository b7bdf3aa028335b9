use crate::graph::VertexId;
use thiserror::Error;

/// Failures of a sorted depth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A construction parameter does not fit the graph,
    /// e.g. the start vertex is not in it.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// All reachable vertices have been returned already.
    #[error("traversal is exhausted")]
    Exhausted,

    /// Traversal bookkeeping disagrees with the graph: a discovered vertex has
    /// no pending entry on the stack, or a visited vertex carries no segment.
    #[error("traversal bookkeeping lost track of vertex {0:?}")]
    InternalInvariantViolation(VertexId),
}
