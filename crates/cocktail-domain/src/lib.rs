//! Response types of the TheCocktailDB search API.
//!
//! This crate contains only pure types with no transport dependencies.
//! Records are read-only snapshots: fetched, validated, discarded.

pub mod drink;
pub mod ingredient;
pub mod search;
