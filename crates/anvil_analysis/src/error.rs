//! Error types for analysis store operations.

use std::path::PathBuf;

/// Errors surfaced by an analysis store.
///
/// Reads are mostly fail-safe: a missing or unreadable cache file is a
/// miss, not an error. Only a cache that is present but cannot be parsed
/// is reported, since silently discarding it would hide corruption.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A cache file exists but its content could not be parsed.
    #[error("corrupt analysis cache at {path}: {reason}")]
    Corrupt {
        /// The cache file path.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// An I/O error occurred while writing a cache file.
    #[error("failed to write analysis cache at {path}: {source}")]
    Io {
        /// The cache file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A serialization error occurred while encoding analysis.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },
}
