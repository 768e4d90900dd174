//! Per-traversal visited state.
//!
//! Each vertex moves `New -> Visited` at most once and never back. The array is
//! allocated fresh for every traversal and owned by it.

use serde::{Deserialize, Serialize};

/// Processing state of one vertex within a single traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitState {
    /// Not popped from the frontier yet.
    #[default]
    New,
    /// Popped at least once. Terminal.
    Visited,
}

impl VisitState {
    /// Returns `true` for [`VisitState::Visited`].
    #[inline]
    pub fn is_visited(self) -> bool {
        matches!(self, Self::Visited)
    }
}

/// A dense visited array indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct VisitStates {
    states: Vec<VisitState>,
}

impl VisitStates {
    /// Creates `len` states, all [`VisitState::New`].
    pub(crate) fn new(len: usize) -> Self {
        Self {
            states: vec![VisitState::New; len],
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    #[inline(always)]
    pub(crate) fn get(&self, vertex: usize) -> Option<VisitState> {
        self.states.get(vertex).copied()
    }

    /// Returns `true` iff `vertex` is still [`VisitState::New`].
    ///
    /// Callers must pass `vertex < self.len()`.
    #[inline(always)]
    pub(crate) fn is_new(&self, vertex: usize) -> bool {
        self.states[vertex] == VisitState::New
    }

    /// Marks `vertex` visited. Returns `true` iff this call performed the
    /// `New -> Visited` transition; re-marking a visited vertex is a no-op.
    ///
    /// Callers must pass `vertex < self.len()`.
    #[inline(always)]
    pub(crate) fn mark(&mut self, vertex: usize) -> bool {
        let was_new = self.is_new(vertex);
        self.states[vertex] = VisitState::Visited;
        was_new
    }

    /// Iterates over visited vertex ids in ascending order.
    pub(crate) fn visited(&self) -> impl Iterator<Item = usize> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter_map(|(v, s)| s.is_visited().then_some(v))
    }
}
