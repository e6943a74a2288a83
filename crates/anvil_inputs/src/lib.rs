//! Resolution and assembly of incremental-compile inputs.
//!
//! For one module's compile this crate answers two questions: where does
//! persisted analysis live (for the module itself and for every classpath
//! entry), and is the chosen cache-file location actually usable. The
//! result is an immutable [`CompileInputs`] record, writability-verified
//! into a [`VerifiedInputs`], which the incremental compiler consumes
//! read-only.

#![warn(missing_docs)]

pub mod error;
pub mod inputs;
pub mod locations;
pub mod resolve;

pub use error::InputsError;
pub use inputs::{CompileInputs, VerifiedInputs};
pub use locations::{
    default_backup_location, default_cache_location, fallback_cache_location, verify_writable,
};
pub use resolve::{analysis_for, resolve_cache_location};
