//! Moving generated asset files into their Football Manager folders.
//!
//! One primitive does all the work: compute `<stem><extension>` inside the
//! destination directory, overwrite plain files, refuse directories, and move
//! with rename when possible. Call sites differ only in how they derive stems.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::paths::expand_tilde;

/// Extension applied when the source file has none.
pub const DEFAULT_SUFFIX: &str = ".png";

/// Errors raised while relocating one asset file.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// Source path does not exist.
    #[error("Source asset does not exist: {}", .0.display())]
    SourceMissing(PathBuf),
    /// Destination filename is occupied by a directory.
    #[error("Destination refers to a directory: {}", .0.display())]
    DestinationIsDirectory(PathBuf),
    /// Underlying filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl RelocateError {
    fn io(context: String, source: io::Error) -> Self {
        RelocateError::Io { context, source }
    }
}

/// Move one asset file into `destination_dir` as `<dest_stem><extension>`.
///
/// The source's extension is preserved; a source without one gets
/// [`DEFAULT_SUFFIX`]. An existing plain file at the destination is replaced
/// (last write wins); an existing directory is an error. Moving a file onto
/// itself is a no-op. Returns the destination path. A leading `~` in either
/// path argument is expanded.
pub fn move_asset(
    source_path: &Path,
    destination_dir: &Path,
    dest_stem: &str,
) -> Result<PathBuf, RelocateError> {
    let source = expand_tilde(source_path);
    if !source.exists() {
        return Err(RelocateError::SourceMissing(source));
    }

    let destination_root = expand_tilde(destination_dir);
    fs::create_dir_all(&destination_root).map_err(|e| {
        RelocateError::io(
            format!(
                "failed to create destination directory {}",
                destination_root.display()
            ),
            e,
        )
    })?;

    let file_name = destination_file_name(&source, dest_stem);
    let destination = destination_root.join(&file_name);

    if same_resolved_file(&source, &destination, &destination_root, &file_name) {
        return Ok(destination);
    }

    if destination.exists() {
        if destination.is_dir() {
            return Err(RelocateError::DestinationIsDirectory(destination));
        }
        fs::remove_file(&destination).map_err(|e| {
            RelocateError::io(
                format!(
                    "failed to remove existing destination {}",
                    destination.display()
                ),
                e,
            )
        })?;
    }

    if let Err(rename_err) = fs::rename(&source, &destination) {
        // Rename cannot cross filesystems; fall back to copy + remove.
        tracing::debug!(error = %rename_err, "rename failed, copying instead");
        fs::copy(&source, &destination).map_err(|e| {
            RelocateError::io(
                format!(
                    "failed to copy {} to {}",
                    source.display(),
                    destination.display()
                ),
                e,
            )
        })?;
        fs::remove_file(&source).map_err(|e| {
            RelocateError::io(format!("failed to remove source {}", source.display()), e)
        })?;
    }

    Ok(destination)
}

/// Move an asset if a source path is provided. Empty paths count as absent
/// (host text fields arrive empty when left unset).
pub fn move_optional_asset(
    source_path: Option<&str>,
    destination_dir: &Path,
    dest_stem: &str,
) -> Result<Option<PathBuf>, RelocateError> {
    match source_path {
        None => Ok(None),
        Some(path) if path.is_empty() => Ok(None),
        Some(path) => move_asset(Path::new(path), destination_dir, dest_stem).map(Some),
    }
}

/// `<dest_stem>` plus the source's extension, or [`DEFAULT_SUFFIX`] without one.
fn destination_file_name(source: &Path, dest_stem: &str) -> OsString {
    let mut name = OsString::from(dest_stem);
    // A name ending in a bare dot reports an empty extension; that counts as
    // no extension.
    match source.extension().filter(|ext| !ext.is_empty()) {
        Some(ext) => {
            name.push(".");
            name.push(ext);
        }
        None => name.push(DEFAULT_SUFFIX),
    }
    name
}

/// True when the source and the computed destination resolve to the same file.
/// Any resolution failure means "not the same" and the move proceeds.
fn same_resolved_file(
    source: &Path,
    destination: &Path,
    destination_root: &Path,
    file_name: &OsStr,
) -> bool {
    let resolved_source = match fs::canonicalize(source) {
        Ok(path) => path,
        Err(_) => return false,
    };
    let resolved_destination = if destination.exists() {
        match fs::canonicalize(destination) {
            Ok(path) => path,
            Err(_) => return false,
        }
    } else {
        // Destination does not exist yet; resolve its directory instead.
        match fs::canonicalize(destination_root) {
            Ok(root) => root.join(file_name),
            Err(_) => return false,
        }
    };
    resolved_source == resolved_destination
}
