//! Property-based tests for omniset-sets
//!
//! Randomized checks of the geometric piece operators and of the
//! disjointness and membership invariants of the piece-list container.

mod piece_properties;
mod set_properties;
