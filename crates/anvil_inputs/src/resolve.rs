//! Per-classpath-entry analysis cache resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anvil_analysis::{Analysis, AnalysisError, AnalysisStore};

use crate::locations::default_cache_location;

/// Decides which cache location, if any, holds analysis for a classpath
/// entry.
///
/// An explicit override always wins, even for archive entries. Otherwise
/// directory entries get the default sibling-of-output derivation —
/// except the module's own output directory, which must not be treated as
/// an upstream dependency of itself. Archives without an override have no
/// recoverable analysis.
///
/// All three arguments are expected to be normalized absolute paths; the
/// override lookup is plain path equality.
pub fn resolve_cache_location(
    entry: &Path,
    self_output_dir: &Path,
    overrides: &BTreeMap<PathBuf, PathBuf>,
) -> Option<PathBuf> {
    if let Some(location) = overrides.get(entry) {
        return Some(location.clone());
    }
    if entry.is_dir() && entry != self_output_dir {
        return Some(default_cache_location(entry));
    }
    None
}

/// Resolves and loads the analysis visible for one classpath entry.
///
/// A miss at the resolved location, or no resolvable location at all,
/// yields [`Analysis::Empty`]; the build is never failed over an absent
/// upstream cache. A corrupt cache propagates as an error.
pub fn analysis_for(
    entry: &Path,
    self_output_dir: &Path,
    overrides: &BTreeMap<PathBuf, PathBuf>,
    store: &dyn AnalysisStore,
) -> Result<Analysis, AnalysisError> {
    match resolve_cache_location(entry, self_output_dir, overrides) {
        Some(location) => Ok(store.load(&location)?.unwrap_or(Analysis::Empty)),
        None => Ok(Analysis::Empty),
    }
}
