//! Persisted compile-analysis objects and the store that loads them.
//!
//! The input-assembly layer treats analysis as opaque: it looks analysis
//! up by cache-file path and substitutes the [`Analysis::Empty`] sentinel
//! when none exists. This crate defines that opaque value, the
//! [`AnalysisStore`] trait it is loaded through, a JSON file-backed store,
//! and an in-memory store for tests.

#![warn(missing_docs)]

pub mod analysis;
pub mod error;
pub mod store;

pub use analysis::{Analysis, AnalysisData};
pub use error::AnalysisError;
pub use store::{AnalysisStore, FileStore, MemoryStore};
