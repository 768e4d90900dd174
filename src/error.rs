//! Error types for graph construction, traversal and queries.
//!
//! All failures in this crate are synchronous and non-retryable: they indicate
//! a vertex index outside the graph or a broken internal invariant.

use thiserror::Error;

/// Error returned by [`Frontier::pop`](crate::collections::Frontier::pop) when
/// the frontier holds no vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pop from an empty frontier")]
pub struct EmptyFrontierError;

/// The error type for reachability queries and graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DfsError {
    /// A vertex index outside `[0, vertex_count)` was supplied by the caller.
    #[error("vertex {vertex} out of bounds for n={vertex_count}")]
    InvalidVertex {
        /// The rejected index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// The graph enumerated a neighbor outside `[0, vertex_count)`.
    #[error("edge {vertex}->{neighbor} out of bounds for n={vertex_count}")]
    InvalidNeighbor {
        /// Vertex whose neighbors were being enumerated.
        vertex: usize,
        /// The rejected neighbor index.
        neighbor: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// The traversal popped from an empty frontier.
    ///
    /// Unreachable in a correct engine: the loop checks emptiness before popping.
    #[error(transparent)]
    EmptyFrontier(#[from] EmptyFrontierError),
}

impl DfsError {
    /// Checks `vertex < vertex_count`, returning [`DfsError::InvalidVertex`] otherwise.
    #[inline]
    pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<(), Self> {
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(Self::InvalidVertex {
                vertex,
                vertex_count,
            })
        }
    }
}
