//! Property-based tests for omniset-core
//!
//! Randomized checks of the extended-real ordering and of predicate
//! substitution and folding.

mod entity_properties;
mod real_properties;
