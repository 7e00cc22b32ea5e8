//! Implementation of the `-v/--version` action.

use clio_core::ProgramInfo;

use crate::config::{AUTHORS, EMAILS, LICENSE, PROGRAM_NAME, RELEASE_DATE, VERSION};
use crate::error::CliResult;

/// Information banner of clio-count.
pub fn program_info() -> CliResult<ProgramInfo> {
    ProgramInfo::from_fields(PROGRAM_NAME, VERSION, RELEASE_DATE, AUTHORS, EMAILS, LICENSE)
}

/// Prints the banner to standard output.
pub fn run_info() -> CliResult<()> {
    program_info()?.print()?;
    Ok(())
}
