//! Settings types deserialized from `anvil.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The top-level compile settings parsed from `anvil.toml`.
///
/// Describes one module's compile: what goes on the classpath, which
/// sources to compile, where compiled classes land, where persisted
/// analysis for upstream dependencies may be found, and how the
/// incremental compiler should behave.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileSettings {
    /// Module identity and output location.
    pub module: ModuleSettings,
    /// Compile inputs: classpath, sources, options, flags.
    #[serde(default)]
    pub compile: CompileSection,
    /// Analysis-cache lookup overrides.
    #[serde(default)]
    pub analysis: AnalysisSection,
    /// Incremental-compiler option bundle, forwarded to the compiler.
    #[serde(default)]
    pub incremental: IncrementalOptions,
}

/// Module identity required in every `anvil.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleSettings {
    /// The module name.
    pub name: String,
    /// The module's compiled-classes output directory.
    pub output: String,
}

/// The `[compile]` section.
///
/// Option lists are order-significant and passed to the compiler verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CompileSection {
    /// Ordered classpath entries (directories and archives). Duplicates
    /// are allowed; order matters to the compiler.
    pub classpath: Vec<String>,
    /// Ordered source files to compile.
    pub sources: Vec<String>,
    /// Options passed verbatim to the Scala compiler.
    pub scalac_options: Vec<String>,
    /// Options passed verbatim to the Java compiler.
    pub javac_options: Vec<String>,
    /// Language mixing order for a mixed Scala/Java compile.
    pub order: CompileOrder,
    /// Skip Scala-specific analysis semantics entirely.
    pub java_only: bool,
    /// Discard this module's own prior analysis before compiling.
    pub force_clean: bool,
    /// Explicit cache-file path for this module's own analysis,
    /// overriding the default sibling-of-output derivation.
    pub cache: Option<String>,
}

/// Order in which Scala and Java sources are compiled.
///
/// An unrecognized value in `anvil.toml` is a parse-time configuration
/// error, not something resolved later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompileOrder {
    /// Scala and Java sources compiled together.
    #[default]
    Mixed,
    /// Java sources first, then Scala.
    JavaThenScala,
    /// Scala sources first, then Java.
    ScalaThenJava,
}

/// The `[analysis]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisSection {
    /// Explicit overrides mapping a classpath directory to the cache file
    /// holding its analysis. An override always wins over the default
    /// sibling-of-output derivation, even for archive entries.
    #[serde(default)]
    pub cache: BTreeMap<String, String>,
}

/// The `[incremental]` option bundle.
///
/// Named, validated fields rather than an untyped pass-through, so a bad
/// value fails at settings load instead of deep inside the compiler.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IncrementalOptions {
    /// Number of invalidation rounds before widening to transitive
    /// dependencies. Must be at least 1.
    pub transitive_step: u32,
    /// Fraction of sources invalidated above which the compiler recompiles
    /// everything. Must lie in `[0, 1]`.
    pub recompile_all_fraction: f64,
    /// Log dependency-relation changes.
    pub relations_debug: bool,
    /// Log API change detection.
    pub api_debug: bool,
    /// Context lines shown in API diffs when `api_debug` is on.
    pub api_diff_context_size: u32,
}

impl Default for IncrementalOptions {
    fn default() -> Self {
        Self {
            transitive_step: 3,
            recompile_all_fraction: 0.5,
            relations_debug: false,
            api_debug: false,
            api_diff_context_size: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_order_default_is_mixed() {
        assert_eq!(CompileOrder::default(), CompileOrder::Mixed);
    }

    #[test]
    fn incremental_defaults() {
        let opts = IncrementalOptions::default();
        assert_eq!(opts.transitive_step, 3);
        assert_eq!(opts.recompile_all_fraction, 0.5);
        assert!(!opts.relations_debug);
        assert!(!opts.api_debug);
        assert_eq!(opts.api_diff_context_size, 5);
    }
}
