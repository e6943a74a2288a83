//! Shared helpers for CLI commands.
//!
//! Module root discovery (walk up looking for `anvil.toml`), settings
//! loading, and cache-root resolution.

use std::path::{Path, PathBuf};

use anvil_common::normalize_from;
use anvil_config::CompileSettings;

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest directory containing
/// `anvil.toml`.
pub fn find_module_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("anvil.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "no anvil.toml found in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Loads the module settings selected by the global flags.
///
/// With `--config` the named file is loaded and its directory becomes the
/// module root; otherwise the root is discovered by walking up from the
/// working directory. Returns the module root alongside the settings so
/// relative paths can be normalized against it.
pub fn load_module_settings(
    global: &GlobalArgs,
) -> Result<(PathBuf, CompileSettings), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    if let Some(config) = &global.config {
        let path = normalize_from(&cwd, Path::new(config));
        let content = std::fs::read_to_string(&path)?;
        let settings = anvil_config::load_settings_from_str(&content)?;
        let module_dir = path
            .parent()
            .ok_or("settings file has no parent directory")?
            .to_path_buf();
        Ok((module_dir, settings))
    } else {
        let module_dir = find_module_root(&cwd)?;
        let settings = anvil_config::load_settings(&module_dir)?;
        Ok((module_dir, settings))
    }
}

/// Resolves the tool-wide cache root: the `--cache-root` flag if given,
/// otherwise `~/.anvil`.
pub fn resolve_cache_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(root) = &global.cache_root {
        let cwd = std::env::current_dir()?;
        return Ok(normalize_from(&cwd, Path::new(root)));
    }
    dirs::home_dir()
        .map(|home| home.join(".anvil"))
        .ok_or_else(|| "cannot determine home directory; pass --cache-root".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_module_root_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("anvil.toml"), "").unwrap();
        let nested = dir.path().join("src").join("main");
        std::fs::create_dir_all(&nested).unwrap();

        let root = find_module_root(&nested).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn find_module_root_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_module_root(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no anvil.toml found"));
    }

    #[test]
    fn explicit_cache_root_wins() {
        let global = GlobalArgs {
            quiet: false,
            verbose: false,
            config: None,
            cache_root: Some("/var/cache/anvil".to_string()),
        };
        let root = resolve_cache_root(&global).unwrap();
        assert_eq!(root, PathBuf::from("/var/cache/anvil"));
    }
}
