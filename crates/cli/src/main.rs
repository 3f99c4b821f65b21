//! One-shot fixup runner.
//!
//! Applies every fixup in the manifest to the working tree and prints one
//! summary line per fixup. Meant to be run once from the repository root
//! and then thrown away; a fixup whose pattern no longer matches is a
//! no-op, not an error.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fixup_core::fixups;

/// Apply the hardcoded source-tree fixups.
#[derive(Parser, Debug)]
#[command(name = "fixup", version, about = "Repair merge leftovers in the working tree")]
struct Cli {
    /// Root of the working tree the fixup targets are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let fixups = fixups::manifest();
    info!(root = %cli.root.display(), count = fixups.len(), "applying fixups");

    for fixup in &fixups {
        let outcome = fixup
            .apply(&cli.root)
            .with_context(|| format!("fixup '{}' failed", fixup.name))?;

        match outcome.replacements {
            0 => println!("{:<20} no occurrences, left unchanged", fixup.name),
            n => println!("{:<20} {} replacement(s)", fixup.name, n),
        }
    }

    Ok(())
}
