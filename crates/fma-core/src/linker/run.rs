//! Linking every resource subdirectory of a source root.

use std::path::{Path, PathBuf};

use crate::linker::{link_subdir, source_directories, LinkError, LinkOutcome};

/// Result for one subdirectory of a [`link_tree`] run.
#[derive(Debug)]
pub struct LinkReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub outcome: Result<LinkOutcome, LinkError>,
}

/// Link every subdirectory of `source_root` into `target_root` under the
/// same name. A failure on one subdirectory is recorded in its report and
/// the rest still run; only an unreadable source root aborts the batch.
pub fn link_tree(source_root: &Path, target_root: &Path) -> Result<Vec<LinkReport>, LinkError> {
    let directories = source_directories(source_root)?;

    let mut reports = Vec::with_capacity(directories.len());
    for source in directories {
        // Paths from read_dir always carry a final component.
        let destination = match source.file_name() {
            Some(name) => target_root.join(name),
            None => continue,
        };
        let outcome = link_subdir(&source, &destination);
        if let Err(err) = &outcome {
            tracing::warn!(
                source = %source.display(),
                destination = %destination.display(),
                error = %err,
                "linking a subdirectory failed"
            );
        }
        reports.push(LinkReport {
            source,
            destination,
            outcome,
        });
    }
    Ok(reports)
}
