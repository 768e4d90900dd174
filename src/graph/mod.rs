//! Graph capability, adjacency-list storage and traversals.
//!
//! Graph code is organized into:
//! - `adjacency`: an owned adjacency-list graph
//! - `traversal`: the depth-first reachability engine and the all-sources driver
//! - `access`: per-traversal visited state shared by the traversals
//!
//! Traversals only see a graph through the [`Graph`] trait, so they run equally
//! well over [`AdjacencyList`], a plain `Vec<Vec<usize>>`, or a test double.

pub mod adjacency;
pub mod traversal;
pub(crate) mod access;

pub use access::visited::VisitState;
pub use adjacency::{AdjacencyList, Directedness};
pub use traversal::{visited_edges, DepthFirstSearch, ReachabilityTable, TraversalStats};

/// Read-only neighbor enumeration over a graph with dense vertex ids `0..vertex_count()`.
///
/// Implementations must return the same finite sequence every time
/// `neighbors(v)` is called for the same `v`, so traversal order is reproducible.
pub trait Graph {
    /// Iterator over the neighbors of one vertex.
    type Neighbors<'a>: Iterator<Item = usize> + 'a
    where
        Self: 'a;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the neighbors of `vertex`.
    ///
    /// Callers pass `vertex < self.vertex_count()` only.
    fn neighbors(&self, vertex: usize) -> Self::Neighbors<'_>;

    /// Returns `true` if `vertex` is a valid id for this graph.
    #[inline]
    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the number of adjacency entries (an undirected edge counts twice).
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.neighbors(v).count())
            .sum()
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Neighbors<'a> = G::Neighbors<'a> where Self: 'a;

    #[inline]
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> Self::Neighbors<'_> {
        (**self).neighbors(vertex)
    }

    #[inline]
    fn contains_vertex(&self, vertex: usize) -> bool {
        (**self).contains_vertex(vertex)
    }

    #[inline]
    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
}

impl Graph for [Vec<usize>] {
    type Neighbors<'a> = core::iter::Copied<core::slice::Iter<'a, usize>>;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> Self::Neighbors<'_> {
        self[vertex].iter().copied()
    }
}

impl Graph for Vec<Vec<usize>> {
    type Neighbors<'a> = core::iter::Copied<core::slice::Iter<'a, usize>>;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> Self::Neighbors<'_> {
        self[vertex].iter().copied()
    }
}
