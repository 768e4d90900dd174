//! An owned adjacency-list graph.
//!
//! Each vertex keeps its out-neighbors in insertion order, which fixes the
//! neighbor enumeration order and therefore the traversal order. Parallel
//! edges and self-loops are stored as given.

use serde::{Deserialize, Serialize};

use crate::error::DfsError;
use crate::graph::Graph;

/// Whether an edge list describes one-way or two-way edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directedness {
    /// `(u, v)` adds `u -> v` only.
    Directed,
    /// `(u, v)` adds `u -> v` and `v -> u`.
    Undirected,
}

/// A graph stored as one neighbor list per vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends an empty list |
/// | `add_edge` | \(O(1)\) amortized | No duplicate check |
/// | `out_degree` | \(O(1)\) | returns `Vec::len` |
/// | `neighbors` | \(O(1)\) + \(O(\text{out-degree})\) to drain | Borrowed, restartable |
/// | `edge_count` | \(O(1)\) | Cached |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAdjacencyList")]
pub struct AdjacencyList {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

/// Serialized form. Deserialization goes through [`AdjacencyList::from_adjacency`],
/// so neighbors are range-checked and the edge count is recomputed, not trusted.
#[derive(Deserialize)]
struct RawAdjacencyList {
    adjacency: Vec<Vec<usize>>,
}

impl TryFrom<RawAdjacencyList> for AdjacencyList {
    type Error = DfsError;

    fn try_from(raw: RawAdjacencyList) -> Result<Self, Self::Error> {
        Self::from_adjacency(raw.adjacency)
    }
}

impl AdjacencyList {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from per-vertex neighbor lists.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidNeighbor`] if any neighbor index is out of bounds.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self, DfsError> {
        let vertex_count = adjacency.len();
        for (vertex, nbrs) in adjacency.iter().enumerate() {
            if let Some(&neighbor) = nbrs.iter().find(|&&w| w >= vertex_count) {
                return Err(DfsError::InvalidNeighbor {
                    vertex,
                    neighbor,
                    vertex_count,
                });
            }
        }
        let edge_count = adjacency.iter().map(Vec::len).sum();
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Creates a graph with `vertex_count` vertices from an edge list.
    ///
    /// Edges are inserted in order, so neighbor order follows the list.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidVertex`] for the first edge with an out-of-range endpoint.
    pub fn from_edges<I>(
        vertex_count: usize,
        edges: I,
        directedness: Directedness,
    ) -> Result<Self, DfsError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            match directedness {
                Directedness::Directed => graph.add_edge(u, v)?,
                Directedness::Undirected => graph.add_undirected_edge(u, v)?,
            }
        }
        Ok(graph)
    }

    /// Adds a vertex with no edges and returns its index.
    pub fn add_vertex(&mut self) -> usize {
        let idx = self.adjacency.len();
        self.adjacency.push(Vec::new());
        idx
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidVertex`] if either endpoint is out of bounds.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), DfsError> {
        DfsError::check_vertex(from, self.vertex_count())?;
        DfsError::check_vertex(to, self.vertex_count())?;
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Adds an undirected edge as the two directed edges `u -> v` and `v -> u`.
    ///
    /// A self-loop `u == v` is stored once.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidVertex`] if either endpoint is out of bounds.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize) -> Result<(), DfsError> {
        self.add_edge(u, v)?;
        if u != v {
            self.add_edge(v, u)?;
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of stored directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the out-degree of `vertex`.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidVertex`] if `vertex` is out of bounds.
    pub fn out_degree(&self, vertex: usize) -> Result<usize, DfsError> {
        DfsError::check_vertex(vertex, self.vertex_count())?;
        Ok(self.adjacency[vertex].len())
    }

    /// Returns the neighbor list of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidVertex`] if `vertex` is out of bounds.
    pub fn neighbors(&self, vertex: usize) -> Result<&[usize], DfsError> {
        DfsError::check_vertex(vertex, self.vertex_count())?;
        Ok(&self.adjacency[vertex])
    }

    /// Iterates over vertex ids.
    pub fn vertices(&self) -> core::ops::Range<usize> {
        0..self.vertex_count()
    }
}

impl Graph for AdjacencyList {
    type Neighbors<'a> = core::iter::Copied<core::slice::Iter<'a, usize>>;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> Self::Neighbors<'_> {
        self.adjacency[vertex].iter().copied()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }
}
