// clio-cli/src/config.rs
//
// Defines the metadata and environment settings of the `clio-count` program.

pub const PROGRAM_NAME: &str = "clio-count";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const RELEASE_DATE: &str = "2024-06-01";
pub const AUTHORS: &str = "Clio Contributors";
pub const EMAILS: &str = "clio@example.org";
pub const LICENSE: &str = env!("CARGO_PKG_LICENSE");

/// Filter directives for the logger, `RUST_LOG` syntax.
pub const LOG_FILTER_ENV: &str = "CLIO_LOG";

/// When true, log lines carry date, time and level after the prefix.
pub const LOG_DECORATE_ENV: &str = "CLIO_LOG_DECORATE";

/// Get a boolean value from an environment variable or use the default
pub fn get_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => val.to_lowercase() == "true" || val == "1",
        Err(_) => default,
    }
}
