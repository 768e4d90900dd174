//! Iterative depth-first reachability.
//!
//! [`DepthFirstSearch`] classifies every vertex of a graph as reachable or not
//! from one source. It drives an explicit [`Frontier`] instead of recursing, so
//! deep graphs cannot overflow the call stack.
//!
//! # Lazy marking
//!
//! A vertex is marked visited when it is **popped**, not when it is pushed.
//! The push is gated only by "still `New` right now", so a vertex with several
//! predecessors can be pushed by each of them before any pop intervenes and sit
//! in the frontier more than once. Every extra copy is popped later and
//! re-marked with no observable effect beyond the work it costs, which
//! [`TraversalStats::redundant_pops`] counts. The reachable set is the same as
//! with mark-on-push; only the redundant work differs.
//!
//! # Bounds
//!
//! A vertex is only pushed while it is `New`, and when a redundant copy of `v`
//! is popped every neighbor pushed by the first pop of `v` sat above it and is
//! already `Visited`. Each adjacency entry therefore causes at most one push,
//! giving `pops = pushes + 1 <= E + 1`.

mod reachability;

pub use reachability::{visited_edges, ReachabilityTable};

use serde::{Deserialize, Serialize};

use crate::collections::Frontier;
use crate::error::DfsError;
use crate::graph::access::visited::{VisitState, VisitStates};
use crate::graph::Graph;

/// Work counters collected while a traversal runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraversalStats {
    /// Vertices popped from the frontier, including the source.
    pub pops: usize,
    /// Neighbors pushed onto the frontier. The initial source push is not counted.
    pub pushes: usize,
    /// Pops of a vertex that was already visited.
    pub redundant_pops: usize,
    /// Adjacency entries examined across all pops.
    pub edges_scanned: usize,
}

/// The set of vertices reachable from one source, computed at construction.
///
/// The traversal runs to completion inside [`DepthFirstSearch::new`]; afterwards
/// the engine is a read-only answer to "is `v` reachable from the source?".
/// There is no way to rerun or extend it: build a new one for another source.
///
/// The graph is only borrowed during construction, so any number of engines
/// may traverse the same graph concurrently from different sources.
///
/// The engine serializes for output but cannot be deserialized: the only way
/// to obtain one is to run the traversal.
///
/// # Example
///
/// ```rust
/// use lazydfs::{AdjacencyList, DepthFirstSearch, Directedness};
///
/// let graph = AdjacencyList::from_edges(
///     5,
///     [(0, 1), (1, 2), (3, 4)],
///     Directedness::Undirected,
/// )?;
///
/// let dfs = DepthFirstSearch::new(&graph, 0)?;
/// assert!(dfs.is_visited(2)?);
/// assert!(!dfs.is_visited(3)?);
/// assert_eq!(dfs.visited().collect::<Vec<_>>(), vec![0, 1, 2]);
/// # Ok::<(), lazydfs::DfsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepthFirstSearch {
    source: usize,
    states: VisitStates,
    order: Vec<usize>,
    stats: TraversalStats,
}

impl DepthFirstSearch {
    /// Computes every vertex reachable from `source`.
    ///
    /// # Errors
    /// - [`DfsError::InvalidVertex`] if `source >= graph.vertex_count()`. No traversal is
    ///   performed.
    /// - [`DfsError::InvalidNeighbor`] if the graph enumerates a neighbor outside the vertex range.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            name = "dfs",
            skip_all,
            fields(source = source, vertex_count = graph.vertex_count())
        )
    )]
    pub fn new<G: Graph + ?Sized>(graph: &G, source: usize) -> Result<Self, DfsError> {
        let vertex_count = graph.vertex_count();
        if let Err(err) = DfsError::check_vertex(source, vertex_count) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%err, "rejected traversal source");
            return Err(err);
        }

        let mut dfs = Self {
            source,
            states: VisitStates::new(vertex_count),
            order: Vec::new(),
            stats: TraversalStats::default(),
        };
        dfs.run(graph)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            visited = dfs.order.len(),
            pops = dfs.stats.pops,
            pushes = dfs.stats.pushes,
            redundant_pops = dfs.stats.redundant_pops,
            "traversal complete"
        );
        Ok(dfs)
    }

    fn run<G: Graph + ?Sized>(&mut self, graph: &G) -> Result<(), DfsError> {
        let vertex_count = self.states.len();
        let mut frontier = Frontier::with_capacity(vertex_count);
        frontier.push(self.source);

        while !frontier.is_empty() {
            let v = frontier.pop()?;
            self.stats.pops += 1;

            // Mark on pop. `v` may already be visited if it was pushed more than once.
            if self.states.mark(v) {
                self.order.push(v);
            } else {
                self.stats.redundant_pops += 1;
                #[cfg(feature = "tracing")]
                tracing::trace!(vertex = v, "redundant pop");
            }

            for w in graph.neighbors(v) {
                self.stats.edges_scanned += 1;
                if w >= vertex_count {
                    return Err(DfsError::InvalidNeighbor {
                        vertex: v,
                        neighbor: w,
                        vertex_count,
                    });
                }
                if self.states.is_new(w) {
                    frontier.push(w);
                    self.stats.pushes += 1;
                }
            }
        }

        debug_assert_eq!(self.stats.pops, self.stats.pushes + 1);
        Ok(())
    }

    /// Returns the source vertex this traversal started from.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the vertex count of the traversed graph.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.states.len()
    }

    /// Returns whether `vertex` is reachable from the source.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidVertex`] if `vertex` is out of bounds.
    #[inline]
    pub fn is_visited(&self, vertex: usize) -> Result<bool, DfsError> {
        self.state(vertex).map(VisitState::is_visited)
    }

    /// Returns the final state of `vertex`.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidVertex`] if `vertex` is out of bounds.
    pub fn state(&self, vertex: usize) -> Result<VisitState, DfsError> {
        self.states.get(vertex).ok_or(DfsError::InvalidVertex {
            vertex,
            vertex_count: self.states.len(),
        })
    }

    /// Number of reachable vertices, the source included.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    /// Iterates over reachable vertices in ascending id order.
    pub fn visited(&self) -> impl Iterator<Item = usize> + '_ {
        self.states.visited()
    }

    /// Reachable vertices in the order they were first popped. Starts with the source.
    #[inline]
    pub fn visit_order(&self) -> &[usize] {
        &self.order
    }

    /// Work counters for the completed traversal.
    #[inline]
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }
}
