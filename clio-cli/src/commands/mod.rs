//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of one program action.

/// Counting lines, words and bytes of the input files.
pub mod count;

/// Printing the program information banner.
pub mod info;
