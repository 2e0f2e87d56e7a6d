use crate::graph::{EdgeId, VertexId};
use core::fmt;

/// Violation of a mesh-adjacency-graph structural invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphInvariantViolation {
    /// An edge referenced an endpoint the caller expected to already exist.
    DanglingEndpoint {
        /// Id of the edge whose endpoint is missing.
        edge: EdgeId,
        /// Id of the missing vertex.
        vertex: VertexId,
    },
    /// A self-loop was encountered where the traversal requires exactly one
    /// endpoint to equal the current vertex.
    SelfLoop {
        /// Id of the offending edge.
        edge: EdgeId,
        /// Id of the vertex that is both source and target.
        vertex: VertexId,
    },
}

impl fmt::Display for GraphInvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingEndpoint { edge, vertex } => {
                write!(
                    f,
                    "edge {edge:?} references missing endpoint {vertex:?}"
                )
            }
            Self::SelfLoop { edge, vertex } => {
                write!(
                    f,
                    "edge {edge:?} is a self-loop at vertex {vertex:?}, which the traversal treats as ill-formed"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GraphInvariantViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
