//! Stable path hashing for fallback cache naming.

use std::fmt;
use std::path::Path;

/// A 128-bit XXH3 hash of an absolute path.
///
/// Used to name the per-module fallback analysis-cache directory: the same
/// output directory always hashes to the same value across runs and
/// processes, so a module that falls back keeps reusing one location
/// instead of fragmenting its cache.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathHash([u8; 16]);

impl PathHash {
    /// Computes the hash of a path from its OS-encoded bytes.
    pub fn of(path: &Path) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(path.as_os_str().as_encoded_bytes());
        Self(hash.to_le_bytes())
    }
}

impl fmt::Display for PathHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PathHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = PathHash::of(Path::new("/proj/target/classes"));
        let b = PathHash::of(Path::new("/proj/target/classes"));
        assert_eq!(a, b);
    }

    #[test]
    fn different_paths_differ() {
        let a = PathHash::of(Path::new("/proj/a/classes"));
        let b = PathHash::of(Path::new("/proj/b/classes"));
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_32_hex_chars() {
        let s = PathHash::of(Path::new("/proj/target/classes")).to_string();
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn debug_abbreviated() {
        let s = format!("{:?}", PathHash::of(Path::new("/p")));
        assert!(s.starts_with("PathHash("));
        assert!(s.ends_with(")"));
    }
}
