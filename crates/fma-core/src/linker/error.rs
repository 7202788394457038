//! Linker error taxonomy and process exit codes.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving roots or creating links.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The source root does not exist.
    #[error("Source directory does not exist: {}", .0.display())]
    SourceMissing(PathBuf),
    /// The source root exists but cannot be read.
    #[error("Source root is not accessible: {}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Target resolution on Windows, where linking is not wired up yet.
    #[error("Windows linking is not implemented yet. Please create links manually.")]
    WindowsUnimplemented,
    /// Target resolution on a platform with no known graphics root.
    #[error("Unsupported platform: {0:?}")]
    UnsupportedPlatform(String),
    /// The platform graphics root needs a home directory and none was found.
    #[error("could not determine the home directory for the graphics root")]
    HomeDirUnavailable,
    /// Underlying filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl LinkError {
    pub(crate) fn io(context: String, source: io::Error) -> Self {
        LinkError::Io { context, source }
    }

    /// Process exit code for this error: 2 when the target root could not be
    /// resolved, 1 for source and filesystem failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            LinkError::WindowsUnimplemented
            | LinkError::UnsupportedPlatform(_)
            | LinkError::HomeDirUnavailable => 2,
            LinkError::SourceMissing(_)
            | LinkError::SourceUnreadable { .. }
            | LinkError::Io { .. } => 1,
        }
    }
}
