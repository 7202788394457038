//! Creating one symlink with safety checks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::linker::LinkError;

/// What happened to one destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A symlink to the source already exists.
    AlreadyLinked,
    /// A new symlink was created.
    Linked,
    /// A symlink exists but points somewhere else; left untouched.
    SkippedForeignLink { target: PathBuf },
    /// A real file or directory occupies the destination; left untouched.
    SkippedExisting,
}

/// Link `destination -> source`, never deleting or replacing anything that
/// is already there. Parent directories of the destination are created as
/// needed.
pub fn link_subdir(source: &Path, destination: &Path) -> Result<LinkOutcome, LinkError> {
    if destination.is_symlink() {
        let resolved_source = fs::canonicalize(source);
        let resolved_destination = fs::canonicalize(destination);
        match (resolved_source, resolved_destination) {
            (Ok(src), Ok(dst)) if src == dst => return Ok(LinkOutcome::AlreadyLinked),
            (_, Ok(dst)) => return Ok(LinkOutcome::SkippedForeignLink { target: dst }),
            // Dangling link; report where it points rather than what it
            // resolves to.
            (_, Err(_)) => {
                let target = fs::read_link(destination).map_err(|e| {
                    LinkError::io(
                        format!("failed to inspect existing link {}", destination.display()),
                        e,
                    )
                })?;
                return Ok(LinkOutcome::SkippedForeignLink { target });
            }
        }
    }

    if destination.exists() {
        return Ok(LinkOutcome::SkippedExisting);
    }

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LinkError::io(
                format!("failed to create parent directory {}", parent.display()),
                e,
            )
        })?;
    }
    symlink_dir(source, destination).map_err(|e| {
        LinkError::io(
            format!(
                "failed to link {} -> {}",
                destination.display(),
                source.display()
            ),
            e,
        )
    })?;
    Ok(LinkOutcome::Linked)
}

#[cfg(unix)]
fn symlink_dir(original: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink_dir(original: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(original, link)
}
