// clio-cli/src/lib.rs
//
// Library portion of the clio-count application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Selection, usage_text};
pub use commands::count::run_count;
pub use commands::info::run_info;
