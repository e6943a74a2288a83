//! Shared leaf types for the Anvil build coordinator.
//!
//! Provides lexical path normalization and the stable path hash used to
//! name fallback analysis-cache locations. Everything here is pure: no
//! filesystem access, no ambient state.

#![warn(missing_docs)]

pub mod hash;
pub mod paths;

pub use hash::PathHash;
pub use paths::normalize_from;
