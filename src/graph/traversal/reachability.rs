//! All-sources reachability and visited-subgraph extraction.
//!
//! [`ReachabilityTable`] runs one [`DepthFirstSearch`] per vertex and records
//! what each source reaches. On an undirected graph every row is the connected
//! component of its source, so [`ReachabilityTable::components`] yields the
//! connected-components partition.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::DepthFirstSearch;
use crate::error::DfsError;
use crate::graph::Graph;

/// For every source vertex, the ascending list of vertices it reaches.
///
/// Serializes for output; a table is only ever built by running traversals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReachabilityTable {
    rows: Vec<Vec<usize>>,
}

fn reachable_row<G: Graph + ?Sized>(graph: &G, source: usize) -> Result<Vec<usize>, DfsError> {
    let dfs = DepthFirstSearch::new(graph, source)?;
    Ok(dfs.visited().collect())
}

impl ReachabilityTable {
    /// Runs a traversal from every vertex of `graph`, one after another.
    ///
    /// This is \(O(V \cdot (V + E))\).
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidNeighbor`] if the graph enumerates an out-of-range neighbor.
    pub fn compute<G: Graph + ?Sized>(graph: &G) -> Result<Self, DfsError> {
        let rows = (0..graph.vertex_count())
            .map(|source| reachable_row(graph, source))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(sources = rows.len(), "reachability table built");
        Ok(Self { rows })
    }

    /// Like [`compute`](Self::compute), but runs the traversals on the rayon pool.
    ///
    /// Each traversal owns its own visited state; only the graph is shared.
    /// The result is identical to the sequential one.
    ///
    /// # Errors
    /// Returns [`DfsError::InvalidNeighbor`] if the graph enumerates an out-of-range neighbor.
    #[cfg(feature = "parallel")]
    pub fn compute_parallel<G: Graph + Sync + ?Sized>(graph: &G) -> Result<Self, DfsError> {
        use rayon::prelude::*;

        let rows = (0..graph.vertex_count())
            .into_par_iter()
            .map(|source| reachable_row(graph, source))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(sources = rows.len(), "reachability table built in parallel");
        Ok(Self { rows })
    }

    /// Returns the vertices reachable from `source`, or `None` if out of range.
    pub fn reachable_from(&self, source: usize) -> Option<&[usize]> {
        self.rows.get(source).map(Vec::as_slice)
    }

    /// Number of sources (equal to the graph's vertex count).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` for the table of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over `(source, reachable)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.rows.iter().map(Vec::as_slice).enumerate()
    }

    /// Distinct reachable sets, ordered by their smallest member.
    ///
    /// For an undirected graph this is the connected-components partition.
    /// For a directed graph the sets may overlap.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let distinct: BTreeSet<&[usize]> = self.rows.iter().map(Vec::as_slice).collect();
        distinct.into_iter().map(<[usize]>::to_vec).collect()
    }
}

impl fmt::Display for ReachabilityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (source, row) in self.iter() {
            writeln!(f, "connected to {source}: {row:?}")?;
        }
        Ok(())
    }
}

/// Returns every edge `(v, w)` of `graph` whose tail `v` was visited by `dfs`.
///
/// This is the edge set of the subgraph a renderer would draw for the traversal.
/// Edges come out grouped by ascending `v`, in neighbor order.
///
/// # Errors
/// Returns [`DfsError::InvalidVertex`] if `graph` is smaller than the traversed graph.
pub fn visited_edges<G: Graph + ?Sized>(
    dfs: &DepthFirstSearch,
    graph: &G,
) -> Result<Vec<(usize, usize)>, DfsError> {
    let mut edges = Vec::new();
    for v in dfs.visited() {
        DfsError::check_vertex(v, graph.vertex_count())?;
        edges.extend(graph.neighbors(v).map(|w| (v, w)));
    }
    Ok(edges)
}
