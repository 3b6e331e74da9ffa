//! Contract harness for the TheCocktailDB search API.
//!
//! A [`client::QueryClient`] fetches raw responses (live over HTTP, or replayed
//! from recorded fixtures); [`verifier`] checks them against the response
//! contract; [`runner`] ties the two together per [`scenario::Scenario`].

pub mod client;
pub mod config;
pub mod error;
pub mod recorded;
pub mod reporter;
pub mod runner;
pub mod scenario;
pub mod tracing;
pub mod verifier;
