//! CLI for the fm-link resource linker.

mod commands;

use clap::Parser;
use fma_core::config::{self, FmaConfig};
use std::path::PathBuf;

use commands::run_link;

/// Top-level CLI for the fm-link resource linker.
#[derive(Debug, Parser)]
#[command(name = "fm-link")]
#[command(
    about = "Symlink generated outputs into the Football Manager graphics folder",
    long_about = None
)]
pub struct Cli {
    /// Root directory containing resource subfolders (default: current directory).
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Override target graphics directory (default: detected per platform).
    #[arg(long, value_name = "PATH")]
    pub target: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments, run the linker and return the process exit code.
    pub fn run_from_args() -> i32 {
        let cli = Cli::parse();
        // The config is an optional convenience layer; a broken file must not
        // change the exit-code contract.
        let cfg = match config::load_or_init() {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(error = %err, "config unreadable, falling back to defaults");
                FmaConfig::default()
            }
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match run_link(&cli, &cfg) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{err}");
                err.exit_code()
            }
        }
    }
}
