//! Loading and saving persisted analysis.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, AnalysisData};
use crate::error::AnalysisError;

/// Current on-disk format version. Files written by an incompatible
/// version read as misses, forcing a clean recompile rather than an error.
const FORMAT_VERSION: u32 = 1;

/// A store that can load and save analysis objects by cache-file path.
///
/// `load` returns `Ok(None)` for a missing or unreadable file (a cache
/// miss) and an error only for a file that is present but unparseable.
pub trait AnalysisStore {
    /// Loads the analysis persisted at `path`, if any.
    fn load(&self, path: &Path) -> Result<Option<Analysis>, AnalysisError>;

    /// Persists `analysis` at `path`, creating parent directories as needed.
    fn save(&self, path: &Path, analysis: &Analysis) -> Result<(), AnalysisError>;
}

/// Versioned envelope written to disk around the analysis payload.
#[derive(Serialize, Deserialize)]
struct StoredAnalysis {
    format_version: u32,
    analysis: AnalysisData,
}

/// JSON file-backed analysis store.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    /// Creates a file-backed store.
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisStore for FileStore {
    fn load(&self, path: &Path) -> Result<Option<Analysis>, AnalysisError> {
        // Missing or unreadable is a miss, not an error.
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        let stored: StoredAnalysis =
            serde_json::from_str(&content).map_err(|e| AnalysisError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if stored.format_version != FORMAT_VERSION {
            return Ok(None);
        }
        Ok(Some(Analysis::Loaded(stored.analysis)))
    }

    fn save(&self, path: &Path, analysis: &Analysis) -> Result<(), AnalysisError> {
        let data = match analysis {
            Analysis::Empty => AnalysisData::default(),
            Analysis::Loaded(data) => data.clone(),
        };
        let stored = StoredAnalysis {
            format_version: FORMAT_VERSION,
            analysis: data,
        };
        let json = serde_json::to_string_pretty(&stored).map_err(|e| {
            AnalysisError::Serialization {
                reason: e.to_string(),
            }
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AnalysisError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(path, json).map_err(|e| AnalysisError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// In-memory analysis store, useful for testing without filesystem
/// dependencies.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<PathBuf, Analysis>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given path → analysis entries.
    pub fn with_entries(entries: impl IntoIterator<Item = (PathBuf, Analysis)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }
}

impl AnalysisStore for MemoryStore {
    fn load(&self, path: &Path) -> Result<Option<Analysis>, AnalysisError> {
        Ok(self.entries.lock().unwrap().get(path).cloned())
    }

    fn save(&self, path: &Path, analysis: &Analysis) -> Result<(), AnalysisError> {
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), analysis.clone());
        Ok(())
    }
}
