//! CLI command handlers.

mod link;

pub use link::run_link;
