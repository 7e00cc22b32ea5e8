//! Error types for the clio helpers.
//!
//! Every fallible operation in the library returns [`CoreResult`]. Opening an
//! input file is the one failure the original tools treated as fatal; here it
//! is an ordinary variant and the program decides whether to exit (see
//! [`crate::exit::OrExit`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by clio-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("couldn't open \"{}\": {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{authors} author(s) but {emails} email address(es)")]
    MismatchedAuthorEmailCount { authors: usize, emails: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    OperationFailed(String),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Result type for clio-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
