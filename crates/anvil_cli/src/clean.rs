//! `anvil clean` — remove derived analysis cache and backup locations.

use std::path::Path;

use anvil_common::normalize_from;
use anvil_inputs::{default_backup_location, default_cache_location};

use crate::pipeline::load_module_settings;
use crate::GlobalArgs;

/// Runs the `anvil clean` command.
///
/// Removes this module's default cache and backup locations, whether they
/// are files or directories. Missing locations are skipped silently.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (module_dir, settings) = load_module_settings(global)?;
    let output_dir = normalize_from(&module_dir, Path::new(&settings.module.output));

    for location in [
        default_cache_location(&output_dir),
        default_backup_location(&output_dir),
    ] {
        if remove_location(&location)? && !global.quiet {
            eprintln!("   Removed {}", location.display());
        }
    }
    Ok(0)
}

/// Removes a file or directory tree, returning whether anything existed.
fn remove_location(path: &Path) -> std::io::Result<bool> {
    match std::fs::metadata(path) {
        Err(_) => Ok(false),
        Ok(meta) => {
            if meta.is_dir() {
                std::fs::remove_dir_all(path)?;
            } else {
                std::fs::remove_file(path)?;
            }
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_missing_location_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!remove_location(&dir.path().join("absent")).unwrap());
    }

    #[test]
    fn removes_cache_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("classes.cache");
        std::fs::write(&cache, "analysis").unwrap();

        assert!(remove_location(&cache).unwrap());
        assert!(!cache.exists());
    }

    #[test]
    fn removes_backup_directory() {
        let dir = tempfile::tempdir().unwrap();
        let backup = dir.path().join("backup").join("classes");
        std::fs::create_dir_all(&backup).unwrap();
        std::fs::write(backup.join("A.class"), "").unwrap();

        assert!(remove_location(&backup).unwrap());
        assert!(!backup.exists());
    }
}
