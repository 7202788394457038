//! Symlinking resource folders into the Football Manager graphics directory.
//!
//! The linker never deletes or replaces anything at a destination: existing
//! links to the right place are reported as already linked, everything else
//! already present is skipped. Rerunning it is a no-op.

mod error;
mod link;
mod run;
mod scan;
mod target;

pub use error::LinkError;
pub use link::{link_subdir, LinkOutcome};
pub use run::{link_tree, LinkReport};
pub use scan::{source_directories, CACHE_DIR_NAME};
pub use target::{resolve_target_root, MAC_GRAPHICS_RELATIVE};
