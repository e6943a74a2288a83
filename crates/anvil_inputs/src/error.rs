//! Error types for input assembly and cache-location verification.

use std::path::PathBuf;

use anvil_analysis::AnalysisError;

/// Errors that can occur while assembling or verifying compile inputs.
///
/// All variants are fatal configuration errors: a missing upstream cache
/// and a non-writable preferred cache location are handled inside the
/// assembly (Empty sentinel and fallback location respectively) and never
/// reach this enum.
#[derive(Debug, thiserror::Error)]
pub enum InputsError {
    /// The output directory has no parent, so sibling cache/backup
    /// locations cannot be derived for it.
    #[error("output directory {path} has no parent directory")]
    NoOutputParent {
        /// The offending output directory.
        path: PathBuf,
    },

    /// Neither the preferred cache location nor the fallback location is
    /// writable.
    #[error("analysis cache fallback location {path} is not writable: {source}")]
    CacheUnwritable {
        /// The fallback location that failed the probe.
        path: PathBuf,
        /// The I/O error from the failed probe.
        source: std::io::Error,
    },

    /// An upstream analysis cache exists but is corrupt.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_parent_display() {
        let err = InputsError::NoOutputParent {
            path: PathBuf::from("/"),
        };
        let msg = err.to_string();
        assert!(msg.contains("has no parent directory"));
        assert!(msg.contains('/'));
    }

    #[test]
    fn unwritable_display() {
        let err = InputsError::CacheUnwritable {
            path: PathBuf::from("/ro/analysis-cache/abc"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not writable"));
        assert!(msg.contains("/ro/analysis-cache/abc"));
    }

    #[test]
    fn analysis_error_passes_through() {
        let err = InputsError::from(AnalysisError::Corrupt {
            path: PathBuf::from("/cache/classes"),
            reason: "bad json".to_string(),
        });
        assert!(err.to_string().contains("corrupt analysis cache"));
    }
}
