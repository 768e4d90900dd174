use lazydfs::{AdjacencyList, DepthFirstSearch, Directedness, Graph, ReachabilityTable};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// A vertex count, a source inside it, and an edge list over it.
fn graph_and_source() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize)>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            Just(n),
            0..n,
            proptest::collection::vec((0..n, 0..n), 0..120),
        )
    })
}

fn directedness() -> impl Strategy<Value = Directedness> {
    prop_oneof![Just(Directedness::Directed), Just(Directedness::Undirected)]
}

/// Reachable set computed independently with petgraph.
fn oracle(
    n: usize,
    edges: &[(usize, usize)],
    directedness: Directedness,
    source: usize,
) -> BTreeSet<usize> {
    let mut g = DiGraph::<(), ()>::with_capacity(n, edges.len() * 2);
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v) in edges {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        if directedness == Directedness::Undirected {
            g.add_edge(NodeIndex::new(v), NodeIndex::new(u), ());
        }
    }

    let mut reached = BTreeSet::new();
    let mut dfs = Dfs::new(&g, NodeIndex::new(source));
    while let Some(node) = dfs.next(&g) {
        reached.insert(node.index());
    }
    reached
}

proptest! {
    #[test]
    fn visited_set_equals_reachable_set(
        (n, source, edges) in graph_and_source(),
        directedness in directedness(),
    ) {
        let g = AdjacencyList::from_edges(n, edges.iter().copied(), directedness).unwrap();
        let dfs = DepthFirstSearch::new(&g, source).unwrap();

        let visited: BTreeSet<usize> = dfs.visited().collect();
        prop_assert_eq!(visited, oracle(n, &edges, directedness, source));
        prop_assert!(dfs.is_visited(source).unwrap());
    }

    #[test]
    fn work_counters_stay_within_bounds(
        (n, source, edges) in graph_and_source(),
        directedness in directedness(),
    ) {
        let g = AdjacencyList::from_edges(n, edges, directedness).unwrap();
        let dfs = DepthFirstSearch::new(&g, source).unwrap();
        let stats = dfs.stats();

        prop_assert_eq!(stats.pops, stats.pushes + 1);
        prop_assert_eq!(stats.pops, dfs.visited_count() + stats.redundant_pops);
        prop_assert!(stats.pushes <= Graph::edge_count(&g));
        prop_assert!(stats.pops <= n + Graph::edge_count(&g));
    }

    #[test]
    fn visit_order_is_a_permutation_of_the_visited_set(
        (n, source, edges) in graph_and_source(),
    ) {
        let g = AdjacencyList::from_edges(n, edges, Directedness::Directed).unwrap();
        let dfs = DepthFirstSearch::new(&g, source).unwrap();

        let order = dfs.visit_order();
        prop_assert_eq!(order[0], source);
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, dfs.visited().collect::<Vec<_>>());
    }

    #[test]
    fn queries_are_stable(
        (n, source, edges) in graph_and_source(),
    ) {
        let g = AdjacencyList::from_edges(n, edges, Directedness::Undirected).unwrap();
        let dfs = DepthFirstSearch::new(&g, source).unwrap();
        for v in 0..n {
            let first = dfs.is_visited(v).unwrap();
            prop_assert_eq!(dfs.is_visited(v).unwrap(), first);
        }
        prop_assert!(dfs.is_visited(n).is_err());
    }

    #[test]
    fn undirected_components_partition_the_vertices(
        (n, _source, edges) in graph_and_source(),
    ) {
        let g = AdjacencyList::from_edges(n, edges, Directedness::Undirected).unwrap();
        let table = ReachabilityTable::compute(&g).unwrap();

        let mut seen = vec![false; n];
        for component in table.components() {
            for v in component {
                prop_assert!(!seen[v], "vertex {} in two components", v);
                seen[v] = true;
            }
        }
        prop_assert!(seen.into_iter().all(|s| s));
    }
}
