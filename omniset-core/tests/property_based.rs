//! Property-based testing entry point for omniset-core
//!
//! Run with: cargo test --test property_based --features property-tests

#![cfg(feature = "property-tests")]

mod property_tests;
