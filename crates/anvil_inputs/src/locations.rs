//! Derivation and verification of analysis cache-file locations.
//!
//! The default layout puts a module's cache and backup next to its output
//! directory: `<parent>/cache/<name>` and `<parent>/backup/<name>`. When
//! the preferred cache location turns out not to be writable, compiles
//! fall back to a per-module directory under the tool-wide cache root,
//! named by a stable hash of the output directory. These three path
//! templates are externally observable layout and must not change.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use anvil_common::PathHash;

use crate::error::InputsError;

/// Subdirectory of the tool cache root holding fallback caches.
const FALLBACK_SUBDIR: &str = "analysis-cache";

/// Returns the default cache-file location for an output directory:
/// `parent(output_dir)/cache/name(output_dir)`.
///
/// Pure. The caller is responsible for rejecting an output directory
/// without a parent before relying on the result.
pub fn default_cache_location(output_dir: &Path) -> PathBuf {
    derived_sibling(output_dir, "cache")
}

/// Returns the default backup location for an output directory:
/// `parent(output_dir)/backup/name(output_dir)`.
pub fn default_backup_location(output_dir: &Path) -> PathBuf {
    derived_sibling(output_dir, "backup")
}

fn derived_sibling(output_dir: &Path, kind: &str) -> PathBuf {
    let parent = output_dir.parent().unwrap_or_else(|| Path::new(""));
    let name = output_dir.file_name().unwrap_or_default();
    parent.join(kind).join(name)
}

/// Returns the fallback cache location for an output directory:
/// `<cache_root>/analysis-cache/<hash of output_dir>`.
///
/// Keyed by the output directory rather than the rejected cache path, so
/// a module keeps falling back to the same location even if its preferred
/// cache path changes between runs.
pub fn fallback_cache_location(output_dir: &Path, cache_root: &Path) -> PathBuf {
    cache_root
        .join(FALLBACK_SUBDIR)
        .join(PathHash::of(output_dir).to_string())
}

/// Verifies that `candidate` is a writable cache-file location, falling
/// back to [`fallback_cache_location`] otherwise.
///
/// The probe creates missing parent directories and checks that the file
/// can be opened for writing (or created; a file created only for the
/// probe is removed again, so a failed or unused probe leaves no
/// artifact). Any I/O error on the candidate counts as "not writable" and
/// triggers the fallback. Only a fallback that itself fails the probe is
/// an error.
pub fn verify_writable(
    candidate: &Path,
    output_dir: &Path,
    cache_root: &Path,
) -> Result<PathBuf, InputsError> {
    if probe(candidate).is_ok() {
        return Ok(candidate.to_path_buf());
    }

    let fallback = fallback_cache_location(output_dir, cache_root);
    match probe(&fallback) {
        Ok(()) => Ok(fallback),
        Err(source) => Err(InputsError::CacheUnwritable {
            path: fallback,
            source,
        }),
    }
}

/// Probes write access without disturbing existing content.
fn probe(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if path.exists() {
        // Open for write without truncating.
        OpenOptions::new().write(true).open(path)?;
    } else {
        OpenOptions::new().write(true).create_new(true).open(path)?;
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_location_is_sibling_of_output() {
        let got = default_cache_location(Path::new("/proj/target/classes"));
        assert_eq!(got, PathBuf::from("/proj/target/cache/classes"));
    }

    #[test]
    fn backup_location_is_sibling_of_output() {
        let got = default_backup_location(Path::new("/proj/target/classes"));
        assert_eq!(got, PathBuf::from("/proj/target/backup/classes"));
    }

    #[test]
    fn fallback_is_hash_keyed_under_cache_root() {
        let output = Path::new("/proj/target/classes");
        let got = fallback_cache_location(output, Path::new("/home/u/.anvil"));
        assert_eq!(
            got,
            Path::new("/home/u/.anvil")
                .join("analysis-cache")
                .join(PathHash::of(output).to_string())
        );
    }

    #[test]
    fn fallback_is_deterministic_across_calls() {
        let output = Path::new("/proj/target/classes");
        let root = Path::new("/home/u/.anvil");
        assert_eq!(
            fallback_cache_location(output, root),
            fallback_cache_location(output, root)
        );
    }

    #[test]
    fn writable_candidate_is_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("target").join("classes");
        let candidate = dir.path().join("target").join("cache").join("classes");

        let got = verify_writable(&candidate, &output, dir.path()).unwrap();
        assert_eq!(got, candidate);
    }

    #[test]
    fn probe_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let candidate = dir.path().join("cache").join("classes");

        verify_writable(&candidate, &dir.path().join("classes"), dir.path()).unwrap();
        assert!(!candidate.exists());
        assert!(candidate.parent().unwrap().is_dir());
    }

    #[test]
    fn probe_preserves_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let candidate = dir.path().join("classes.cache");
        std::fs::write(&candidate, "persisted analysis").unwrap();

        let got = verify_writable(&candidate, &dir.path().join("classes"), dir.path()).unwrap();
        assert_eq!(got, candidate);
        assert_eq!(
            std::fs::read_to_string(&candidate).unwrap(),
            "persisted analysis"
        );
    }

    #[test]
    fn unwritable_candidate_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the cache's parent directory should be makes the
        // candidate unwritable.
        let blocker = dir.path().join("cache");
        std::fs::write(&blocker, "").unwrap();
        let candidate = blocker.join("classes");
        let output = dir.path().join("classes");
        let root = dir.path().join("anvil-root");

        let got = verify_writable(&candidate, &output, &root).unwrap();
        assert_eq!(got, fallback_cache_location(&output, &root));
    }

    #[test]
    fn fallback_is_stable_across_repeated_verification() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("cache");
        std::fs::write(&blocker, "").unwrap();
        let candidate = blocker.join("classes");
        let output = dir.path().join("classes");
        let root = dir.path().join("anvil-root");

        let first = verify_writable(&candidate, &output, &root).unwrap();
        let second = verify_writable(&candidate, &output, &root).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn verification_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("target").join("classes");
        let candidate = default_cache_location(&output);

        let once = verify_writable(&candidate, &output, dir.path()).unwrap();
        let twice = verify_writable(&once, &output, dir.path()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unusable_fallback_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("cache");
        std::fs::write(&blocker, "").unwrap();
        let candidate = blocker.join("classes");
        // Cache root under a plain file: the fallback probe cannot create
        // its parent directories either.
        let bad_root = blocker.join("root");

        let err = verify_writable(&candidate, &dir.path().join("classes"), &bad_root).unwrap_err();
        assert!(matches!(err, InputsError::CacheUnwritable { .. }));
    }
}
