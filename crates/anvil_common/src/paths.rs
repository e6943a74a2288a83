//! Lexical path normalization.
//!
//! Every path-valued setting is normalized to an absolute form before any
//! comparison or map lookup, so that path equality is well-defined across
//! the override map, the classpath, and the analysis map.

use std::path::{Component, Path, PathBuf};

/// Normalizes `path` to an absolute form, resolving relative paths
/// against `base`.
///
/// Purely lexical: `.` components are removed and `..` components pop the
/// preceding component (a `..` at the root is dropped). The path does not
/// need to exist and no symlinks are followed, so the result is
/// deterministic and idempotent.
///
/// `base` must be absolute.
pub fn normalize_from(base: &Path, path: &Path) -> PathBuf {
    debug_assert!(base.is_absolute(), "normalization base must be absolute");

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the filesystem root has nowhere to go.
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            c => out.push(c.as_os_str()),
        }
    }
    out
}
