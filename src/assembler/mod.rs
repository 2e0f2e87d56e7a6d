//! Graph-driven DoF assembler: a breadth-first traversal over a mesh
//! adjacency graph that, using a caller-supplied matcher as the
//! connectivity oracle, produces a per-cell global-DoF table and the CSR
//! sparsity pattern of the assembled operator.

use crate::error::AssemblyError;
use crate::graph::{Edge, Graph, VertexId};
use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use std::collections::VecDeque;

#[cfg(test)]
#[path = "./tests.rs"]
mod tests;

/// Local-index pairs a matcher pushes for one edge: `(localOnSource,
/// localOnTarget)`.
pub type DoFPairs = Vec<(usize, usize)>;

/// Owns the running global-DoF counter and the per-cell local-to-global
/// DoF table built by [`Self::add_graph`].
pub struct Assembler {
    base: usize,
    next_global_dof: usize,
    dof_map: HashMap<VertexId, Vec<Option<usize>>>,
}

impl Assembler {
    /// Constructs an assembler whose global DoF numbering starts at
    /// `base`.
    #[must_use]
    pub fn new(base: usize) -> Self {
        Self {
            base,
            next_global_dof: base,
            dof_map: HashMap::new(),
        }
    }

    /// Number of distinct global DoF ids assigned so far. Combined with
    /// the constructor's `base`, ids are densely packed in
    /// `[base, base + dof_count())`.
    #[must_use]
    pub fn dof_count(&self) -> usize {
        self.next_global_dof - self.base
    }

    /// Ids of every cell with an entry in the DoF map.
    pub fn keys(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.dof_map.keys().copied()
    }

    /// Every cell's id paired with its resolved global-DoF sequence.
    ///
    /// # Panics
    ///
    /// Panics if any entry is still unassigned, i.e. if called before
    /// [`Self::add_graph`] has run to completion.
    pub fn items(&self) -> impl Iterator<Item = (VertexId, impl Iterator<Item = usize> + '_)> {
        self.dof_map.iter().map(|(&id, dofs)| (id, resolve(dofs)))
    }

    /// The resolved global-DoF sequence for `vertex`, in local-index
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` has no entry, or if an entry is still
    /// unassigned.
    #[must_use]
    pub fn dofs_of(&self, vertex: VertexId) -> impl Iterator<Item = usize> + '_ {
        let table = self
            .dof_map
            .get(&vertex)
            .unwrap_or_else(|| unreachable!("{vertex} has no entry in the assembler's DoF map"));
        resolve(table)
    }

    /// Breadth-first traversal over `graph` (undirected in effect): mints
    /// or reconciles global DoF ids for every cell the matcher connects,
    /// starting from [`Graph::first_vertex`].
    ///
    /// `dof_counter` reports how many local DoFs a cell (identified by
    /// its payload) carries; `dof_matcher` fills `pairs` with the local
    /// index pairs `(onSource, onTarget)` that must share a global DoF
    /// across one edge.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::SelfLoop`] if traversal reaches a
    /// self-loop edge (treated as ill-formed mesh input, since exactly one
    /// endpoint must equal the current vertex for "the other end" to be
    /// well defined), or [`AssemblyError::DoFReconciliation`] if the
    /// matcher asserts a pair whose two sides already carry different
    /// global ids.
    pub fn add_graph<V, E>(
        &mut self,
        graph: &Graph<V, E>,
        mut dof_counter: impl FnMut(&V) -> usize,
        mut dof_matcher: impl FnMut(&Edge<E>, &mut DoFPairs),
    ) -> Result<(), AssemblyError> {
        let Some(root) = graph.first_vertex() else {
            return Ok(());
        };

        let mut visited = HashSet::new();
        visited.insert(root);
        let mut queue = VecDeque::new();
        queue.push_back(root);
        let mut pairs = Vec::new();

        while let Some(current) = queue.pop_front() {
            for edge_id in graph.incident_edges(current) {
                let edge = graph
                    .find_edge(edge_id)
                    .expect("incident edge id always refers to a present edge");

                let other = edge.other_end(current).ok_or_else(|| {
                    use crate::error::GraphInvariantViolation;
                    AssemblyError::SelfLoop(GraphInvariantViolation::SelfLoop {
                        edge: edge_id,
                        vertex: current,
                    })
                })?;
                if visited.insert(other) {
                    queue.push_back(other);
                }

                let source = edge.source();
                let target = edge.target();
                self.ensure_table(graph, source, &mut dof_counter);
                self.ensure_table(graph, target, &mut dof_counter);

                pairs.clear();
                dof_matcher(edge, &mut pairs);

                for &(i, j) in &pairs {
                    self.reconcile(edge_id, source, target, i, j)?;
                }
            }
        }

        for table in self.dof_map.values_mut() {
            for slot in table {
                if slot.is_none() {
                    *slot = Some(self.next_global_dof);
                    self.next_global_dof += 1;
                }
            }
        }

        Ok(())
    }

    fn ensure_table<V, E>(
        &mut self,
        graph: &Graph<V, E>,
        vertex: VertexId,
        dof_counter: &mut impl FnMut(&V) -> usize,
    ) {
        if self.dof_map.contains_key(&vertex) {
            return;
        }
        let payload = graph
            .find_vertex(vertex)
            .expect("edge endpoints always refer to present vertices");
        let size = dof_counter(payload);
        self.dof_map.insert(vertex, vec![None; size]);
    }

    fn reconcile(
        &mut self,
        edge: crate::graph::EdgeId,
        source: VertexId,
        target: VertexId,
        i: usize,
        j: usize,
    ) -> Result<(), AssemblyError> {
        let source_slot = self.dof_map.get(&source).and_then(|t| t.get(i).copied()).flatten();
        let target_slot = self.dof_map.get(&target).and_then(|t| t.get(j).copied()).flatten();

        let resolved = match (source_slot, target_slot) {
            (None, None) => {
                let id = self.next_global_dof;
                self.next_global_dof += 1;
                id
            }
            (Some(id), None) | (None, Some(id)) => id,
            (Some(source_id), Some(target_id)) => {
                if source_id != target_id {
                    use crate::error::DoFReconciliationError;
                    return Err(AssemblyError::from(DoFReconciliationError::new(
                        edge, source, target, i, j, source_id, target_id,
                    )));
                }
                source_id
            }
        };

        self.dof_map.get_mut(&source).expect("ensured above")[i] = Some(resolved);
        self.dof_map.get_mut(&target).expect("ensured above")[j] = Some(resolved);
        Ok(())
    }

    /// Builds the CSR sparsity pattern of the assembled operator: for
    /// every row (a global DoF id, relative to `base`), the column
    /// indices are the union of global DoFs of every cell whose DoF set
    /// contains that row, sorted ascending. `values` is zero-filled with
    /// the same length as `col_idx`.
    ///
    /// # Panics
    ///
    /// Panics if called before [`Self::add_graph`] has fully resolved
    /// every entry (i.e. if any DoF table still contains `None`).
    #[must_use]
    pub fn make_csr<T: Default + Clone>(&self) -> (usize, usize, Vec<usize>, Vec<usize>, Vec<T>) {
        let count = self.dof_count();
        let mut row_cols: Vec<HashSet<usize>> = (0..count).map(|_| HashSet::new()).collect();

        for table in self.dof_map.values() {
            let relative: Vec<usize> = table
                .iter()
                .map(|slot| slot.expect("add_graph must fully resolve every DoF") - self.base)
                .collect();
            for &row in &relative {
                row_cols[row].extend(relative.iter().copied());
            }
        }

        let mut row_ptr = Vec::with_capacity(count + 1);
        let mut col_idx = Vec::new();
        row_ptr.push(0);
        for cols in &row_cols {
            let mut sorted: Vec<usize> = cols.iter().copied().collect();
            sorted.sort_unstable();
            col_idx.extend(sorted);
            row_ptr.push(col_idx.len());
        }

        let values = vec![T::default(); col_idx.len()];
        (count, count, row_ptr, col_idx, values)
    }
}

fn resolve(table: &[Option<usize>]) -> impl Iterator<Item = usize> + '_ {
    table
        .iter()
        .map(|slot| slot.expect("add_graph must fully resolve every DoF before it is read"))
}
