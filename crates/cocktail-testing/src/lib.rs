//! Test utilities for the cocktail contract harness.
//!
//! Provides canned response bodies and the recorded-fixture directory lookup.
//! Import in `#[cfg(test)]` blocks and `tests/` only — never in production code.

pub mod bodies;
pub mod fixture;
