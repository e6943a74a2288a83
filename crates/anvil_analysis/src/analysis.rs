//! The opaque analysis value consumed by the incremental compiler.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Previously persisted compile analysis for one module, or the sentinel
/// for "no prior knowledge".
///
/// Input assembly never inspects or mutates the loaded data; it only
/// resolves where analysis lives and substitutes `Empty` when nothing is
/// found there. A missing upstream cache is always `Empty`, never an
/// error, so an absent dependency degrades to full-rebuild consideration
/// for that edge instead of failing the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// No persisted analysis exists (or none was resolvable).
    Empty,
    /// Analysis loaded from a cache file.
    Loaded(AnalysisData),
}

impl Analysis {
    /// Returns `true` for the `Empty` sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, Analysis::Empty)
    }
}

/// The persisted payload of a non-empty analysis.
///
/// Owned by the analysis store; the shape is a compact summary of what an
/// incremental compiler records per module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisData {
    /// Content stamp per compiled source file, as recorded at the last
    /// successful compile.
    #[serde(default)]
    pub source_stamps: BTreeMap<PathBuf, String>,

    /// Class files produced per source file.
    #[serde(default)]
    pub products: BTreeMap<PathBuf, Vec<PathBuf>>,
}
