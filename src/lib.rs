//! # `lazydfs` - Iterative Depth-First Reachability
//!
//! Computes, for a directed or undirected graph in adjacency-list form, the set
//! of vertices reachable from a source vertex. The traversal is an iterative
//! depth-first search over an explicit LIFO frontier, so recursion depth never
//! grows with the graph.
//!
//! ## Guarantees
//!
//! - **Soundness and completeness**: a vertex is reported visited iff a path of
//!   edges leads to it from the source. The source is always visited.
//! - **Monotonic state**: each vertex moves `New -> Visited` at most once and
//!   never back.
//! - **Bounded work**: at most `E + 1` pops for a graph with `E` adjacency entries.
//! - **No shared mutable state**: each traversal owns its visited array and
//!   frontier. Graphs are only read, so traversals from different sources may
//!   run concurrently over one graph.
//!
//! ## Lazy marking
//!
//! Vertices are marked visited when popped, not when pushed. A vertex can
//! therefore appear in the frontier more than once; extra copies are popped and
//! re-marked harmlessly. See [`graph::traversal`] for the details and
//! [`TraversalStats`] for the counters that expose it.
//!
//! ## Architecture
//!
//! 1. **Frontier** ([`Frontier`]): LIFO stack of discovered vertex ids, duplicates allowed.
//! 2. **Graph capability** ([`Graph`]): vertex count plus restartable neighbor
//!    enumeration. Implemented for [`AdjacencyList`], `Vec<Vec<usize>>` and `[Vec<usize>]`.
//! 3. **Reachability engine** ([`DepthFirstSearch`]): runs the traversal at
//!    construction and answers `is_visited` queries afterwards.
//! 4. **All-sources driver** ([`ReachabilityTable`]): one engine per vertex;
//!    yields connected components on undirected graphs.
//!
//! ## Cargo features
//!
//! - `tracing` (default): structured `tracing` events and spans for traversals.
//! - `parallel`: `ReachabilityTable::compute_parallel` on the rayon pool.
//!
//! ## Example
//!
//! ```rust
//! use lazydfs::{AdjacencyList, DepthFirstSearch, Directedness, ReachabilityTable};
//!
//! let graph = AdjacencyList::from_edges(
//!     5,
//!     [(0, 1), (1, 2), (3, 4)],
//!     Directedness::Undirected,
//! )?;
//!
//! let dfs = DepthFirstSearch::new(&graph, 3)?;
//! assert_eq!(dfs.visited().collect::<Vec<_>>(), vec![3, 4]);
//!
//! let table = ReachabilityTable::compute(&graph)?;
//! assert_eq!(table.components(), vec![vec![0, 1, 2], vec![3, 4]]);
//! # Ok::<(), lazydfs::DfsError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::Frontier;
pub use error::{DfsError, EmptyFrontierError};
pub use graph::{
    visited_edges, AdjacencyList, DepthFirstSearch, Directedness, Graph, ReachabilityTable,
    TraversalStats, VisitState,
};

// Compile-time checks that traversal results can cross threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DepthFirstSearch>();
    assert_send_sync::<ReachabilityTable>();
    assert_send_sync::<AdjacencyList>();
};
