use crate::graph::{EdgeId, VertexId};
use core::fmt;

/// Two sides of an edge already carry different global DoF ids when the
/// matcher asserts they must be fused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoFReconciliationError {
    edge: EdgeId,
    source_vertex: VertexId,
    target_vertex: VertexId,
    source_local: usize,
    target_local: usize,
    source_global: usize,
    target_global: usize,
}

impl DoFReconciliationError {
    #[allow(clippy::too_many_arguments, reason = "names both sides of the conflicting edge in full")]
    pub(crate) const fn new(
        edge: EdgeId,
        source_vertex: VertexId,
        target_vertex: VertexId,
        source_local: usize,
        target_local: usize,
        source_global: usize,
        target_global: usize,
    ) -> Self {
        Self {
            edge,
            source_vertex,
            target_vertex,
            source_local,
            target_local,
            source_global,
            target_global,
        }
    }

    /// Id of the edge whose matcher pair could not be reconciled.
    #[must_use]
    pub const fn edge(&self) -> EdgeId {
        self.edge
    }

    /// Id of the edge's source vertex.
    #[must_use]
    pub const fn source_vertex(&self) -> VertexId {
        self.source_vertex
    }

    /// Id of the edge's target vertex.
    #[must_use]
    pub const fn target_vertex(&self) -> VertexId {
        self.target_vertex
    }
}

impl fmt::Display for DoFReconciliationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DoF reconciliation failed on edge {:?}: local {} on vertex {:?} already has global id {}, \
             but local {} on vertex {:?} already has global id {}",
            self.edge,
            self.source_local,
            self.source_vertex,
            self.source_global,
            self.target_local,
            self.target_vertex,
            self.target_global
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DoFReconciliationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
