//! Input/output helpers for small command-line programs.
//!
//! This crate covers the routine parts of a filter-style tool: running a
//! handler over every input file (or standard input), printing a version
//! banner, installing a compact help message on a clap parser and prefixing
//! log lines with the program name.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clap::Parser;
//! use clio_core::{LogConfig, OrExit, ProgramInfo, UsageText};
//! use std::io::BufRead;
//!
//! #[derive(Parser)]
//! struct Args {
//!     /// Print version information
//!     #[arg(short = 'v')]
//!     info: bool,
//!     files: Vec<String>,
//! }
//!
//! LogConfig::for_program("lines").init().unwrap();
//! let args: Args = UsageText::new(
//!     "lines [-v] [FILE...]",
//!     "Counts the lines of each input.",
//!     "lines notes.txt",
//! )
//! .parse();
//!
//! if args.info {
//!     ProgramInfo::from_fields("lines", "0.1", "2024-01-01", "Ann", "ann@x.com", "MIT")
//!         .or_exit()
//!         .print()
//!         .or_exit();
//!     return;
//! }
//!
//! let mut total = 0usize;
//! clio_core::parse_files(&args.files, &mut total, |reader, total| {
//!     for line in reader.lines() {
//!         line?;
//!         *total += 1;
//!     }
//!     Ok(())
//! })
//! .or_exit();
//! println!("{}", total);
//! ```

pub mod error;
pub mod exit;
pub mod files;
pub mod info;
pub mod logging;
pub mod usage;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use exit::{OrExit, fatal};
pub use files::{FileIterator, STDIN_NAME, parse_files};
pub use info::{Author, ProgramInfo, print_info};
pub use logging::{Decorations, LogConfig, configure_log_prefix};
pub use usage::UsageText;
