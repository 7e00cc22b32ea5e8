// ============================================================================
// clio-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Installs the program's log layout
//
// Every diagnostic of clio-count goes through the `log` macros and ends up on
// standard error as `clio-count: <message>`. The layout comes from
// clio-core's `LogConfig`, backed by `env_logger`.
//
// USAGE:
// - CLIO_LOG=debug: per-file progress messages
// - CLIO_LOG_DECORATE=1: add date, time and level to every line

use clio_core::{Decorations, LogConfig};

use crate::config::{LOG_DECORATE_ENV, LOG_FILTER_ENV, PROGRAM_NAME, get_env_bool};
use crate::error::CliResult;

/// Builds the log layout from the environment.
pub fn log_config() -> LogConfig {
    let config = LogConfig::for_program(PROGRAM_NAME).with_env_filter(LOG_FILTER_ENV);
    if get_env_bool(LOG_DECORATE_ENV, false) {
        config.with_decorations(Decorations {
            level: true,
            ..Decorations::STANDARD
        })
    } else {
        config
    }
}

/// Installs the log layout as the process-wide logger.
pub fn init_logging() -> CliResult<()> {
    log_config().init()
}
