//! Anvil CLI — the command-line interface for the Anvil build coordinator.
//!
//! Provides `anvil inputs` for assembling, verifying, and inspecting the
//! compile inputs of the current module, and `anvil clean` for removing
//! the module's derived analysis cache and backup locations.

#![warn(missing_docs)]

mod clean;
mod inputs;
mod pipeline;

use std::process;

use clap::{Parser, Subcommand};

/// Anvil — incremental-compile analysis coordination for multi-module builds.
#[derive(Parser, Debug)]
#[command(name = "anvil", version, about = "Anvil build coordinator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `anvil.toml` settings file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Tool-wide cache root used for fallback analysis caches
    /// (default: `~/.anvil`).
    #[arg(long, global = true)]
    pub cache_root: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble and verify the module's compile inputs, then print them.
    Inputs,
    /// Remove the module's derived analysis cache and backup locations.
    Clean,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom settings file.
    pub config: Option<String>,
    /// Optional override for the tool-wide cache root.
    pub cache_root: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
        cache_root: cli.cache_root,
    };

    let result = match cli.command {
        Command::Inputs => inputs::run(&global),
        Command::Clean => clean::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
