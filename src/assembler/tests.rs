use super::Assembler;
use crate::error::{AssemblyError, GraphInvariantViolation};
use crate::graph::{Edge, EdgeId, Graph, VertexId};

fn constant_pairs(pairs: Vec<(usize, usize)>) -> impl FnMut(&Edge<()>, &mut Vec<(usize, usize)>) {
    move |_edge, out| out.extend_from_slice(&pairs)
}

// S4 — 3x1 mesh, 1D linear basis, continuous numbering.
#[test]
fn s4_three_cell_chain_continuous_numbering() {
    let mut graph: Graph<(), ()> = Graph::new();
    let cells: Vec<VertexId> = (0..3).map(VertexId::new).collect();
    for &id in &cells {
        graph.insert_vertex(id, (), false);
    }
    graph.insert_edge(EdgeId::new(0), cells[0], cells[1], (), false);
    graph.insert_edge(EdgeId::new(1), cells[1], cells[2], (), false);

    let mut assembler = Assembler::new(0);
    assembler
        .add_graph(&graph, |_| 2, constant_pairs(vec![(1, 0)]))
        .unwrap();

    let table0: Vec<usize> = assembler.dofs_of(cells[0]).collect();
    let table1: Vec<usize> = assembler.dofs_of(cells[1]).collect();
    let table2: Vec<usize> = assembler.dofs_of(cells[2]).collect();

    assert_eq!(table0[1], table1[0]);
    assert_eq!(table1[1], table2[0]);

    let mut all_ids = vec![table0[0], table0[1], table1[1], table2[1]];
    all_ids.sort_unstable();
    all_ids.dedup();
    assert_eq!(all_ids.len(), 4);
    assert_eq!(assembler.dof_count(), 4);
}

// S5 — 3x2 mesh, bilinear basis.
#[test]
fn s5_grid_mesh_shared_corner_identities() {
    // Corners ordered (-,-),(+,-),(-,+),(+,+) -> local indices 0,1,2,3.
    let horizontal = vec![(1, 0), (3, 2)];
    let vertical = vec![(2, 0), (3, 1)];

    let mut graph: Graph<(), Vec<(usize, usize)>> = Graph::new();
    let cells: Vec<VertexId> = (0..6).map(VertexId::new).collect();
    for &id in &cells {
        graph.insert_vertex(id, (), false);
    }

    let mut edge_id = 0u64;
    let mut add = |graph: &mut Graph<(), Vec<(usize, usize)>>, a: usize, b: usize, pairs: Vec<(usize, usize)>| {
        graph.insert_edge(EdgeId::new(edge_id), cells[a], cells[b], pairs, false);
        edge_id += 1;
    };

    add(&mut graph, 0, 1, horizontal.clone());
    add(&mut graph, 1, 2, horizontal.clone());
    add(&mut graph, 3, 4, horizontal.clone());
    add(&mut graph, 4, 5, horizontal.clone());
    add(&mut graph, 0, 3, vertical.clone());
    add(&mut graph, 1, 4, vertical.clone());
    add(&mut graph, 2, 5, vertical);

    let mut assembler = Assembler::new(0);
    assembler
        .add_graph(&graph, |_| 4, |edge, out| out.extend_from_slice(&edge.payload))
        .unwrap();

    let table: Vec<Vec<usize>> = cells
        .iter()
        .map(|&id| assembler.dofs_of(id).collect())
        .collect();

    assert_eq!(table[0][1], table[1][0]);
    assert_eq!(table[0][2], table[3][0]);
    assert_eq!(table[0][3], table[1][2]);
    assert_eq!(table[1][2], table[3][1]);
    assert_eq!(table[3][1], table[4][0]);
    assert_eq!(table[1][1], table[2][0]);
    assert_eq!(table[1][3], table[2][2]);
    assert_eq!(table[2][2], table[4][1]);
    assert_eq!(table[4][1], table[5][0]);
    assert_eq!(table[2][3], table[5][1]);

    assert_eq!(assembler.dof_count(), 12);

    // S6 — CSR shape for S5.
    let (rows, cols, row_ptr, col_idx, values) = assembler.make_csr::<f64>();
    assert_eq!(rows, 12);
    assert_eq!(cols, 12);
    assert_eq!(row_ptr.len(), 13);
    assert_eq!(values.len(), col_idx.len());
    assert!(values.iter().all(|&v| v == 0.0));

    // Diagonal entries are always present.
    for row in 0..rows {
        let row_cols = &col_idx[row_ptr[row]..row_ptr[row + 1]];
        assert!(row_cols.contains(&row));
        // Columns within a row are sorted ascending.
        assert!(row_cols.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn empty_graph_is_a_noop() {
    let graph: Graph<(), ()> = Graph::new();
    let mut assembler = Assembler::new(5);
    assembler.add_graph(&graph, |_| 2, constant_pairs(vec![])).unwrap();
    assert_eq!(assembler.dof_count(), 0);
}

#[test]
fn base_offset_shifts_the_numbering_window() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = VertexId::new(0);
    let b = VertexId::new(1);
    graph.insert_edge(EdgeId::new(0), a, b, (), false);

    let mut assembler = Assembler::new(100);
    assembler.add_graph(&graph, |_| 2, constant_pairs(vec![(1, 0)])).unwrap();

    assert!(assembler.dofs_of(a).all(|id| id >= 100));
    assert_eq!(assembler.dof_count(), 3);
}

#[test]
fn conflicting_matcher_pairs_fail_reconciliation() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = VertexId::new(0);
    let b = VertexId::new(1);
    graph.insert_edge(EdgeId::new(0), a, b, (), false);

    // Two incompatible assertions across the same edge: first fuses
    // local 0<->0, second fuses local 1<->0, which should force local 0
    // and local 1 on `a` to collapse onto the same global id as local 0
    // on `b` -- but local 0 and local 1 on `a` were already assigned
    // distinct ids by the first pair, so the second pair conflicts.
    let mut assembler = Assembler::new(0);
    let err = assembler
        .add_graph(&graph, |_| 2, constant_pairs(vec![(0, 0), (1, 0)]))
        .unwrap_err();
    assert!(matches!(err, AssemblyError::DoFReconciliation(_)));
}

#[test]
fn self_loop_is_rejected() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = VertexId::new(0);
    graph.insert_edge(EdgeId::new(0), a, a, (), false);

    let mut assembler = Assembler::new(0);
    let err = assembler
        .add_graph(&graph, |_| 1, constant_pairs(vec![(0, 0)]))
        .unwrap_err();
    assert!(matches!(
        err,
        AssemblyError::SelfLoop(GraphInvariantViolation::SelfLoop { .. })
    ));
}

#[test]
fn vertex_untouched_by_any_edge_still_gets_a_dof() {
    // The final sweep assigns ids to any vertex `add_graph` discovered but
    // no edge ever touched, so an isolated vertex still gets a full table.
    let mut graph: Graph<(), ()> = Graph::new();
    let a = VertexId::new(0);
    graph.insert_vertex(a, (), false);

    let mut assembler = Assembler::new(0);
    assembler.add_graph(&graph, |_| 3, constant_pairs(vec![])).unwrap();

    let dofs: Vec<usize> = assembler.dofs_of(a).collect();
    assert_eq!(dofs.len(), 3);
    assert_eq!(assembler.dof_count(), 3);
}
