//! Parsing and validation of `anvil.toml` compile settings.
//!
//! This crate reads the per-module settings file and produces a
//! strongly-typed [`CompileSettings`]: classpath, sources, output
//! directory, compiler option lists, analysis-cache overrides, and the
//! incremental-compiler option bundle. Paths are kept raw here; input
//! assembly normalizes them.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_settings, load_settings_from_str};
pub use types::*;
