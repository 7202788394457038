//! Appender nodes that file generated images into Football Manager folders.
//!
//! Three nodes cover the asset kinds FM reads from its graphics tree:
//! player portraits, club logos (normal and small), and kits (home, away,
//! third). Each takes paths produced upstream in the graph, derives the
//! FM filename from an identifier, and moves the files into place.

mod kit;
mod logo;
mod portrait;

pub use kit::{KitAppender, KitAppenderOutput};
pub use logo::{LogoAppender, LogoAppenderOutput};
pub use portrait::{PortraitAppender, PortraitAppenderOutput};

/// Host text fields arrive as empty strings when left unset; treat those
/// as absent.
pub(crate) fn is_absent(path: &Option<String>) -> bool {
    path.as_deref().map_or(true, str::is_empty)
}
