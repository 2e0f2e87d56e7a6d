use super::{DoFReconciliationError, GraphInvariantViolation};
use core::fmt;

/// Either of the two ways [`crate::assembler::Assembler::add_graph`] can
/// fail: a DoF reconciliation conflict, or a self-loop encountered during
/// traversal (self-loops are ill-formed mesh input: "the other end" of the
/// edge is undefined when both endpoints are the current vertex).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssemblyError {
    /// Two sides of an edge already carry conflicting global DoF ids.
    DoFReconciliation(DoFReconciliationError),
    /// The traversal reached a self-loop edge.
    SelfLoop(GraphInvariantViolation),
}

impl From<DoFReconciliationError> for AssemblyError {
    fn from(error: DoFReconciliationError) -> Self {
        Self::DoFReconciliation(error)
    }
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoFReconciliation(error) => write!(f, "{error}"),
            Self::SelfLoop(error) => write!(f, "{error}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AssemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DoFReconciliation(error) => Some(error),
            Self::SelfLoop(error) => Some(error),
        }
    }
}
