use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::{Graph, GraphOptions, Traversal};
use std::hint::black_box;

/// Deterministic pseudo-random graph: a spine for connectivity plus `fanout` extra edges per
/// node with weights drawn from a small LCG.
fn build_edges(node_count: u32, fanout: u32) -> Vec<(u32, u32, f64)> {
    let mut edges = Vec::new();
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (state >> 33) as u32
    };

    for i in 0..node_count.saturating_sub(1) {
        edges.push((i, i + 1, f64::from(1 + next() % 16)));
    }
    for i in 0..node_count {
        for _ in 0..fanout {
            let j = next() % node_count;
            if j > i {
                edges.push((i, j, f64::from(1 + next() % 64)));
            }
        }
    }
    edges
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    for &(nodes, fanout) in &[(1_000u32, 4u32), (10_000, 4)] {
        let edges = build_edges(nodes, fanout);
        let undirected = Graph::from_edges(GraphOptions { directed: false }, edges.clone());
        let directed = Graph::from_edges(GraphOptions { directed: true }, edges.clone());
        let label = format!("{nodes}x{fanout}");

        group.bench_with_input(BenchmarkId::new("build", &label), &edges, |b, edges| {
            b.iter(|| {
                Graph::from_edges(GraphOptions { directed: false }, black_box(edges).clone())
            })
        });
        group.bench_function(BenchmarkId::new("dijkstra", &label), |b| {
            b.iter(|| black_box(undirected.min_path_map(Some(&0)).unwrap()))
        });
        group.bench_function(BenchmarkId::new("kruskal", &label), |b| {
            b.iter(|| black_box(undirected.min_spanning_tree().unwrap()))
        });
        group.bench_function(BenchmarkId::new("topology", &label), |b| {
            b.iter(|| black_box(directed.topology_depths().unwrap()))
        });
        group.bench_function(BenchmarkId::new("width_first", &label), |b| {
            b.iter(|| black_box(undirected.traverse(Traversal::Width, None, |_, _| {})))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
