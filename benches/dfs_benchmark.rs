use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lazydfs::{AdjacencyList, DepthFirstSearch, Directedness, ReachabilityTable};

/// Each vertex links to a handful of others in a fixed pattern.
fn patterned_graph(nodes: usize, degree: usize, directedness: Directedness) -> AdjacencyList {
    let edges = (0..nodes).flat_map(move |i| (1..=degree).map(move |j| (i, (i + j * 7) % nodes)));
    AdjacencyList::from_edges(nodes, edges, directedness).expect("pattern stays in range")
}

fn bench_single_source(c: &mut Criterion) {
    let nodes = 10_000;
    let sparse = patterned_graph(nodes, 4, Directedness::Directed);
    let dense = patterned_graph(nodes, 32, Directedness::Undirected);

    let mut group = c.benchmark_group("dfs_single_source");
    group.throughput(Throughput::Elements(nodes as u64));

    group.bench_function("sparse_directed", |b| {
        b.iter(|| black_box(DepthFirstSearch::new(&sparse, black_box(0)).unwrap()));
    });

    group.bench_function("dense_undirected", |b| {
        b.iter(|| black_box(DepthFirstSearch::new(&dense, black_box(0)).unwrap()));
    });

    // Same adjacency through the blanket impl for nested vectors.
    let nested: Vec<Vec<usize>> = (0..nodes)
        .map(|v| sparse.neighbors(v).unwrap().to_vec())
        .collect();
    group.bench_function("sparse_directed_nested_vec", |b| {
        b.iter(|| black_box(DepthFirstSearch::new(&nested, black_box(0)).unwrap()));
    });

    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let nodes = 100_000;
    let chain = AdjacencyList::from_edges(
        nodes,
        (0..nodes - 1).map(|v| (v, v + 1)),
        Directedness::Directed,
    )
    .expect("chain stays in range");

    let mut group = c.benchmark_group("dfs_chain");
    group.throughput(Throughput::Elements(nodes as u64));
    group.bench_function("deep_chain", |b| {
        b.iter(|| black_box(DepthFirstSearch::new(&chain, 0).unwrap().visited_count()));
    });
    group.finish();
}

fn bench_all_sources(c: &mut Criterion) {
    let nodes = 500;
    let graph = patterned_graph(nodes, 2, Directedness::Undirected);

    let mut group = c.benchmark_group("reachability_table");
    group.throughput(Throughput::Elements(nodes as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(ReachabilityTable::compute(&graph).unwrap()));
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(ReachabilityTable::compute_parallel(&graph).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_single_source, bench_chain, bench_all_sources);
criterion_main!(benches);
