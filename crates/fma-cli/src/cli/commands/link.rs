//! `fm-link` – link resource subfolders into the graphics directory.

use fma_core::config::FmaConfig;
use fma_core::linker::{link_tree, resolve_target_root, LinkError, LinkOutcome};
use fma_core::paths::expand_tilde;
use std::path::PathBuf;

use crate::cli::Cli;

/// Resolve both roots, link every subdirectory and print one line per
/// destination. Per-subdirectory failures are printed as skips; only root
/// resolution and an unreadable source are fatal.
pub fn run_link(args: &Cli, cfg: &FmaConfig) -> Result<(), LinkError> {
    let source_root = resolve_source_root(args, cfg)?;

    let os = std::env::consts::OS;
    let target_root = resolve_target(args, cfg, os)?;

    println!("System detected: {os}");
    println!("Source root: {}", source_root.display());
    println!("Target root: {}", target_root.display());

    let reports = link_tree(&source_root, &target_root)?;
    if reports.is_empty() {
        println!("No subdirectories found to link. Nothing to do.");
        return Ok(());
    }

    for report in &reports {
        let destination = report.destination.display();
        let source = report.source.display();
        match &report.outcome {
            Ok(LinkOutcome::AlreadyLinked) => {
                println!("✓ Already linked: {destination} -> {source}");
            }
            Ok(LinkOutcome::Linked) => {
                println!("→ Linked {destination} -> {source}");
            }
            Ok(LinkOutcome::SkippedForeignLink { target }) => {
                println!(
                    "! Skipping {destination}: existing symlink points elsewhere ({})",
                    target.display()
                );
            }
            Ok(LinkOutcome::SkippedExisting) => {
                println!("! Skipping {destination}: path already exists and is not a symlink");
            }
            Err(err) => {
                println!("! Skipping {destination}: {err}");
            }
        }
    }

    Ok(())
}

/// Source root precedence: flag, then config, then the current directory.
fn resolve_source_root(args: &Cli, cfg: &FmaConfig) -> Result<PathBuf, LinkError> {
    let raw = match (&args.source, &cfg.linker.source_root) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => path.clone(),
        (None, None) => std::env::current_dir().map_err(|e| LinkError::Io {
            context: "failed to determine the current directory".to_string(),
            source: e,
        })?,
    };
    let source_root = expand_tilde(&raw);
    if !source_root.exists() {
        return Err(LinkError::SourceMissing(source_root));
    }
    source_root
        .canonicalize()
        .map_err(|e| LinkError::SourceUnreadable {
            path: source_root,
            source: e,
        })
}

/// Target root precedence: flag, then config, then platform detection.
fn resolve_target(args: &Cli, cfg: &FmaConfig, os: &str) -> Result<PathBuf, LinkError> {
    match (&args.target, &cfg.linker.target_root) {
        (Some(path), _) => Ok(expand_tilde(path)),
        (None, Some(path)) => Ok(expand_tilde(path)),
        (None, None) => resolve_target_root(os),
    }
}
