//! `anvil inputs` — assemble, verify, and print compile inputs.

use anvil_analysis::FileStore;
use anvil_inputs::CompileInputs;

use crate::pipeline::{load_module_settings, resolve_cache_root};
use crate::GlobalArgs;

/// Runs the `anvil inputs` command.
///
/// Loads the module settings, assembles the compile inputs, verifies the
/// cache-file location, and prints the resulting record to stdout.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (module_dir, settings) = load_module_settings(global)?;
    let cache_root = resolve_cache_root(global)?;

    if !global.quiet {
        eprintln!("   Assembling inputs for module `{}`", settings.module.name);
    }

    let store = FileStore::new();
    let assembled = CompileInputs::build(&settings, &module_dir, &store)?;
    let intended = assembled.cache_file.clone();

    if global.verbose {
        let with_analysis = assembled
            .analysis_map
            .values()
            .filter(|a| !a.is_empty())
            .count();
        eprintln!(
            "   {} classpath entries, {} with prior analysis",
            assembled.classpath.len(),
            with_analysis
        );
    }

    let verified = assembled.verify(&cache_root)?;
    if verified.cache_file != intended && !global.quiet {
        eprintln!(
            "note: cache location {} is not writable, using {}",
            intended.display(),
            verified.cache_file.display()
        );
    }

    print!("{verified}");
    Ok(0)
}
