//! LIFO frontier of discovered-but-unprocessed vertices.
//!
//! Unlike a visited-gated worklist, the frontier does not deduplicate: the same
//! vertex may sit in it several times at once. Deduplication is the caller's
//! job and happens lazily, when a vertex is popped.

use crate::error::EmptyFrontierError;

/// A last-in-first-out stack of vertex indices.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push` | \(O(1)\) amortized |
/// | `pop` | \(O(1)\) |
/// | `is_empty` | \(O(1)\) |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    stack: Vec<usize>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Creates an empty frontier with room for `capacity` vertices before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `vertex` onto the top of the frontier. Duplicates are kept.
    #[inline]
    pub fn push(&mut self, vertex: usize) {
        self.stack.push(vertex);
    }

    /// Removes and returns the most recently pushed vertex.
    ///
    /// # Errors
    /// Returns [`EmptyFrontierError`] if the frontier is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<usize, EmptyFrontierError> {
        self.stack.pop().ok_or(EmptyFrontierError)
    }

    /// Returns `true` if no vertices are waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut frontier = Frontier::new();
        frontier.push(1);
        frontier.push(2);
        frontier.push(3);

        assert_eq!(frontier.pop(), Ok(3));
        assert_eq!(frontier.pop(), Ok(2));
        assert_eq!(frontier.pop(), Ok(1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn keeps_duplicate_entries() {
        let mut frontier = Frontier::with_capacity(4);
        frontier.push(7);
        frontier.push(7);

        assert_eq!(frontier.pop(), Ok(7));
        assert!(!frontier.is_empty());
        assert_eq!(frontier.pop(), Ok(7));
        assert!(frontier.is_empty());
    }

    #[test]
    fn pop_on_empty_fails() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.pop(), Err(EmptyFrontierError));

        frontier.push(0);
        frontier.pop().unwrap();
        assert_eq!(frontier.pop(), Err(EmptyFrontierError));
    }

    #[test]
    fn is_empty_has_no_side_effects() {
        let mut frontier = Frontier::new();
        frontier.push(5);
        for _ in 0..3 {
            assert!(!frontier.is_empty());
        }
        assert_eq!(frontier.pop(), Ok(5));
        assert!(frontier.is_empty());
    }
}
