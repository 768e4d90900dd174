//! Internal graph accessors and low-level building blocks.
//!
//! This module is `pub(crate)` so traversals can share per-vertex state
//! without exposing the storage as part of the public API surface.

pub(crate) mod visited;
