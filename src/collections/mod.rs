//! Worklist containers used by the graph traversals.

pub mod frontier;

pub use frontier::Frontier;
