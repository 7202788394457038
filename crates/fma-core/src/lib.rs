pub mod config;
pub mod logging;

// Asset tooling modules
pub mod appender;
pub mod linker;
pub mod node;
pub mod paths;
pub mod relocate;
