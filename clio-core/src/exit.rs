//! Log-and-exit for errors a program cannot continue from.

use std::fmt;
use std::process;

use log::{Level, error, log_enabled};

use crate::logging::write_unfiltered;

/// Exit status used for fatal errors.
pub const FAILURE_STATUS: i32 = 1;

/// Logs `message` at error level and terminates the process with
/// [`FAILURE_STATUS`]. No destructors run.
///
/// The message reaches standard error even when no logger is installed or
/// the level filter drops errors.
pub fn fatal(message: impl fmt::Display) -> ! {
    if log_enabled!(Level::Error) {
        error!("{}", message);
        log::logger().flush();
    } else {
        write_unfiltered(message);
    }
    process::exit(FAILURE_STATUS)
}

/// Unwraps a result or reports the error through [`fatal`].
///
/// ```rust,no_run
/// use clio_core::OrExit;
///
/// let paths = vec!["input.txt"];
/// let mut bytes = 0u64;
/// clio_core::parse_files(&paths, &mut bytes, |reader, bytes| {
///     *bytes += std::io::copy(reader, &mut std::io::sink())?;
///     Ok(())
/// })
/// .or_exit();
/// ```
pub trait OrExit<T> {
    fn or_exit(self) -> T;
}

impl<T, E: fmt::Display> OrExit<T> for Result<T, E> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => fatal(e),
        }
    }
}
