//! Assembly of the immutable compile-inputs record.
//!
//! A [`CompileInputs`] is built fresh per compile invocation: all paths
//! are normalized once at construction, the analysis map is resolved for
//! every classpath entry, and the record then passes exactly once through
//! cache-file verification to become a [`VerifiedInputs`]. The compiler
//! consumes the verified record read-only; nothing here is persisted.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use anvil_analysis::{Analysis, AnalysisStore};
use anvil_common::normalize_from;
use anvil_config::{CompileOrder, CompileSettings, IncrementalOptions};

use crate::error::InputsError;
use crate::locations::{default_cache_location, verify_writable};
use crate::resolve::analysis_for;

/// The fully assembled inputs for one module's incremental compile.
///
/// All paths are absolute. The classpath keeps the user's ordering,
/// duplicates included; `analysis_map` holds exactly one entry per
/// distinct classpath path.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileInputs {
    /// Ordered classpath entries (directories and archives).
    pub classpath: Vec<PathBuf>,
    /// Ordered source files to compile.
    pub sources: Vec<PathBuf>,
    /// The module's compiled-classes output directory.
    pub output_dir: PathBuf,
    /// Options passed verbatim to the Scala compiler.
    pub scalac_options: Vec<String>,
    /// Options passed verbatim to the Java compiler.
    pub javac_options: Vec<String>,
    /// Where this module's own analysis is persisted.
    pub cache_file: PathBuf,
    /// Resolved upstream analysis per distinct classpath entry.
    pub analysis_map: HashMap<PathBuf, Analysis>,
    /// Discard this module's own prior analysis.
    pub force_clean: bool,
    /// Skip Scala-specific analysis semantics.
    pub java_only: bool,
    /// Language mixing order for mixed compiles.
    pub compile_order: CompileOrder,
    /// Incremental-compiler option bundle, forwarded unchanged.
    pub incremental: IncrementalOptions,
}

impl CompileInputs {
    /// Assembles compile inputs from raw settings.
    ///
    /// Every path-valued setting is normalized against `module_dir`. The
    /// analysis map is resolved with this module's output directory as the
    /// self-exclusion, so the module never looks up its own in-progress
    /// analysis as if it were upstream. The cache file is the normalized
    /// user override if one was given, otherwise the default
    /// sibling-of-output location; it is not yet verified writable.
    ///
    /// An output directory without a parent is rejected here: no sibling
    /// cache or backup location can be derived for it.
    pub fn build(
        settings: &CompileSettings,
        module_dir: &Path,
        store: &dyn AnalysisStore,
    ) -> Result<Self, InputsError> {
        let output_dir = normalize_from(module_dir, Path::new(&settings.module.output));
        if output_dir.parent().is_none() {
            return Err(InputsError::NoOutputParent { path: output_dir });
        }

        let classpath: Vec<PathBuf> = settings
            .compile
            .classpath
            .iter()
            .map(|p| normalize_from(module_dir, Path::new(p)))
            .collect();
        let sources: Vec<PathBuf> = settings
            .compile
            .sources
            .iter()
            .map(|p| normalize_from(module_dir, Path::new(p)))
            .collect();
        let overrides = settings
            .analysis
            .cache
            .iter()
            .map(|(entry, cache)| {
                (
                    normalize_from(module_dir, Path::new(entry)),
                    normalize_from(module_dir, Path::new(cache)),
                )
            })
            .collect();

        let mut analysis_map = HashMap::new();
        for entry in &classpath {
            if !analysis_map.contains_key(entry) {
                let analysis = analysis_for(entry, &output_dir, &overrides, store)?;
                analysis_map.insert(entry.clone(), analysis);
            }
        }

        let cache_file = match &settings.compile.cache {
            Some(cache) => normalize_from(module_dir, Path::new(cache)),
            None => default_cache_location(&output_dir),
        };

        Ok(Self {
            classpath,
            sources,
            output_dir,
            scalac_options: settings.compile.scalac_options.clone(),
            javac_options: settings.compile.javac_options.clone(),
            cache_file,
            analysis_map,
            force_clean: settings.compile.force_clean,
            java_only: settings.compile.java_only,
            compile_order: settings.compile.order,
            incremental: settings.incremental.clone(),
        })
    }

    /// Verifies that the cache file is writable, substituting the
    /// deterministic fallback location if not.
    ///
    /// Consuming `self` makes the once-and-only-once contract structural:
    /// the compiler-facing record is [`VerifiedInputs`], and the only way
    /// to obtain one is through this step.
    pub fn verify(self, cache_root: &Path) -> Result<VerifiedInputs, InputsError> {
        let cache_file = verify_writable(&self.cache_file, &self.output_dir, cache_root)?;
        Ok(VerifiedInputs {
            inputs: Self { cache_file, ..self },
        })
    }
}

impl fmt::Display for CompileInputs {
    /// Human-readable key/value dump for diagnostics; not machine-parsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "output directory:  {}", self.output_dir.display())?;
        writeln!(f, "cache file:        {}", self.cache_file.display())?;
        writeln!(f, "compile order:     {:?}", self.compile_order)?;
        writeln!(f, "java only:         {}", self.java_only)?;
        writeln!(f, "force clean:       {}", self.force_clean)?;
        writeln!(f, "scalac options:    {}", self.scalac_options.join(" "))?;
        writeln!(f, "javac options:     {}", self.javac_options.join(" "))?;
        writeln!(
            f,
            "incremental:       transitive-step={} recompile-all-fraction={}",
            self.incremental.transitive_step, self.incremental.recompile_all_fraction
        )?;
        writeln!(f, "sources:")?;
        for source in &self.sources {
            writeln!(f, "  {}", source.display())?;
        }
        writeln!(f, "classpath:")?;
        for entry in &self.classpath {
            let state = match self.analysis_map.get(entry) {
                Some(analysis) if !analysis.is_empty() => "analysis loaded",
                _ => "no analysis",
            };
            writeln!(f, "  {}  [{state}]", entry.display())?;
        }
        Ok(())
    }
}

/// Compile inputs whose cache file has passed writability verification.
///
/// Terminal for this subsystem: the incremental compiler consumes it
/// read-only and no further transition exists.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedInputs {
    inputs: CompileInputs,
}

impl Deref for VerifiedInputs {
    type Target = CompileInputs;

    fn deref(&self) -> &CompileInputs {
        &self.inputs
    }
}

impl fmt::Display for VerifiedInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inputs.fmt(f)
    }
}
