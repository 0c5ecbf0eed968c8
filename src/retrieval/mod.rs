//! Nearest-neighbour candidate retrieval.
//!
//! The embedding model and vector index live outside this crate; the pipeline only depends on
//! the [`FragmentRetriever`] capability.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use client::FragmentRetriever;
pub use error::RetrievalError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockRetriever, RecordedSearch};
