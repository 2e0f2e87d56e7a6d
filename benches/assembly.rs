use criterion::{criterion_group, criterion_main, Criterion};
use femgraph::{
    AnsatzSpace, Assembler, Comparison, ConnectivityMap, Edge, EdgeId, Graph, Polynomial,
    ScalarBasis, VertexId,
};
use std::hint::black_box;

fn linear_basis() -> ScalarBasis<Polynomial> {
    ScalarBasis::new(vec![
        Polynomial::new(vec![0.5, -0.5]),
        Polynomial::new(vec![0.5, 0.5]),
    ])
}

fn connectivity_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivityMap");
    let samples: Vec<f64> = (0..33).map(|i| -1.0 + 2.0 * f64::from(i) / 32.0).collect();
    let comparison = Comparison::new(1e-10, 1e-10);

    group.bench_function("bilinear2d", |b| {
        b.iter(|| {
            let space: AnsatzSpace<Polynomial, 2> = AnsatzSpace::new(linear_basis());
            black_box(ConnectivityMap::new(&space, &samples, &comparison))
        });
    });

    group.finish();
}

/// Builds the adjacency graph of a `rows x cols` grid of quadrilateral
/// cells, one vertex per cell, horizontal and vertical edges only.
fn grid_graph(rows: usize, cols: usize) -> Graph<(), ()> {
    let mut graph = Graph::new();
    let id = |r: usize, c: usize| VertexId::new((r * cols + c) as u64);

    for r in 0..rows {
        for c in 0..cols {
            graph.insert_vertex(id(r, c), (), false);
        }
    }

    let mut edge_id = 0u64;
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                graph.insert_edge(EdgeId::new(edge_id), id(r, c), id(r, c + 1), (), false);
                edge_id += 1;
            }
            if r + 1 < rows {
                graph.insert_edge(EdgeId::new(edge_id), id(r, c), id(r + 1, c), (), false);
                edge_id += 1;
            }
        }
    }

    graph
}

/// Matches local index 1/3 on the source's right face against local index
/// 0/2 on the target's left face, or local 2/3 against 0/1 for a vertical
/// neighbor, mirroring the bilinear scan used in the library's own tests.
fn dof_matcher(cols: usize) -> impl Fn(&Edge<()>, &mut Vec<(usize, usize)>) {
    move |edge, out| {
        let source_id = edge.source().get() as usize;
        let target_id = edge.target().get() as usize;
        let is_horizontal = target_id == source_id + 1 && (source_id % cols) + 1 < cols;
        if is_horizontal {
            out.push((1, 0));
            out.push((3, 2));
        } else {
            out.push((2, 0));
            out.push((3, 1));
        }
    }
}

fn dof_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembler");

    for &size in &[8usize, 32, 64] {
        group.bench_function(format!("grid{size}x{size}"), |b| {
            b.iter(|| {
                let graph = grid_graph(size, size);
                let matcher = dof_matcher(size);
                let mut assembler = Assembler::new(0);
                assembler
                    .add_graph(&graph, |&()| 4, matcher)
                    .expect("well-formed grid");
                black_box(assembler.dof_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, connectivity_construction, dof_assembly);
criterion_main!(benches);
