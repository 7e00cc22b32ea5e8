//! Log line prefixes for command-line programs.
//!
//! Small tools report problems as `prog: message` on standard error, without
//! timestamps. [`LogConfig::for_program`] describes exactly that layout;
//! [`LogConfig::init`] installs it as the `log` backend through `env_logger`.
//! Calling it again swaps in the new layout; the last call wins.
//!
//! Decorations (date, time, level, source location) can be switched back on
//! when a tool wants a more detailed log:
//!
//! ```text
//! prog: 2009/01/23 01:23:23 ERROR main.rs:42: oops
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::{PoisonError, RwLock};

use chrono::{Local, NaiveDateTime};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::CoreResult;

/// Optional fields written between the prefix and the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decorations {
    /// Local date, `2009/01/23`.
    pub date: bool,
    /// Local time, `01:23:23`.
    pub time: bool,
    /// Microsecond resolution for `time`.
    pub microseconds: bool,
    /// Record level, `ERROR`.
    pub level: bool,
    /// Source file and line of the log call.
    pub location: bool,
}

impl Decorations {
    pub const NONE: Self = Self {
        date: false,
        time: false,
        microseconds: false,
        level: false,
        location: false,
    };

    /// Date and time, the usual layout of a service log.
    pub const STANDARD: Self = Self {
        date: true,
        time: true,
        ..Self::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Layout and level of the program's log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    prefix: String,
    decorations: Decorations,
    level: LevelFilter,
    env_var: Option<String>,
}

impl LogConfig {
    /// `"<name>: "` prefix, no decorations, `Info` level.
    pub fn for_program(name: &str) -> Self {
        Self {
            prefix: format!("{}: ", name),
            decorations: Decorations::NONE,
            level: LevelFilter::Info,
            env_var: None,
        }
    }

    /// Replaces the prefix with `"<name>: "`.
    pub fn with_prefix(mut self, name: &str) -> Self {
        self.prefix = format!("{}: ", name);
        self
    }

    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Reads `RUST_LOG`-style filter directives from the variable `var` when
    /// the logger is built. They take precedence over the configured level.
    pub fn with_env_filter(mut self, var: impl Into<String>) -> Self {
        self.env_var = Some(var.into());
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn decorations(&self) -> Decorations {
        self.decorations
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Formats one log line, without the trailing newline, as it would be
    /// written now.
    pub fn format_line(
        &self,
        level: Level,
        location: Option<(&str, u32)>,
        message: impl fmt::Display,
    ) -> String {
        self.render(Local::now().naive_local(), level, location, message)
    }

    fn render(
        &self,
        now: NaiveDateTime,
        level: Level,
        location: Option<(&str, u32)>,
        message: impl fmt::Display,
    ) -> String {
        let d = self.decorations;
        let mut line = self.prefix.clone();

        if d.date {
            line.push_str(&now.format("%Y/%m/%d ").to_string());
        }
        if d.time {
            let format = if d.microseconds { "%H:%M:%S%.6f " } else { "%H:%M:%S " };
            line.push_str(&now.format(format).to_string());
        }
        if d.level {
            line.push_str(&format!("{:<5} ", level));
        }
        if d.location {
            if let Some((file, number)) = location {
                line.push_str(&format!("{}:{}: ", file, number));
            }
        }

        line.push_str(&message.to_string());
        line
    }

    /// Builds an `env_logger` backend that writes lines in this layout to
    /// standard error.
    pub fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(self.level);
        if let Some(var) = &self.env_var {
            builder.parse_env(env_logger::Env::new().filter(var.as_str()));
        }

        let config = self.clone();
        builder.format(move |buf, record| {
            let location = record.file().zip(record.line());
            writeln!(
                buf,
                "{}",
                config.render(
                    Local::now().naive_local(),
                    record.level(),
                    location,
                    record.args()
                )
            )
        });
        builder
    }

    /// Installs this layout as the process-wide logger.
    ///
    /// The first call registers the backend with `log`. Later calls replace
    /// the layout and level of that backend, so the last configuration wins.
    /// Fails with [`crate::CoreError::Logger`] only when a logger from outside
    /// this module is already installed.
    pub fn init(&self) -> CoreResult<()> {
        let logger = self.builder().build();
        let level = logger.filter();

        let first = {
            let mut active = ACTIVE.current.write().unwrap_or_else(PoisonError::into_inner);
            let first = active.is_none();
            *active = Some(ActiveLogger {
                config: self.clone(),
                logger,
            });
            first
        };
        if first {
            if let Err(e) = log::set_logger(&ACTIVE) {
                *ACTIVE.current.write().unwrap_or_else(PoisonError::into_inner) = None;
                return Err(e.into());
            }
        }

        log::set_max_level(level);
        log::debug!("Logger initialized with level: {}", level);
        Ok(())
    }
}

struct ActiveLogger {
    config: LogConfig,
    logger: env_logger::Logger,
}

/// Backend registered with `log`; forwards to the most recent configuration.
struct SharedLogger {
    current: RwLock<Option<ActiveLogger>>,
}

static ACTIVE: SharedLogger = SharedLogger {
    current: RwLock::new(None),
};

impl Log for SharedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current
            .as_ref()
            .is_some_and(|active| active.logger.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(active) = current.as_ref() {
            active.logger.log(record);
        }
    }

    fn flush(&self) {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(active) = current.as_ref() {
            active.logger.flush();
        }
    }
}

/// Writes `message` to standard error as an error line, whatever the level
/// filter says. Uses the installed layout when there is one.
pub(crate) fn write_unfiltered(message: impl fmt::Display) {
    let line = {
        let current = ACTIVE.current.read().unwrap_or_else(PoisonError::into_inner);
        match current.as_ref() {
            Some(active) => active.config.format_line(Level::Error, None, &message),
            None => message.to_string(),
        }
    };
    let _ = writeln!(io::stderr(), "{}", line);
}

/// Installs `"<name>: "`-prefixed, undecorated log lines for the process.
pub fn configure_log_prefix(name: &str) -> CoreResult<()> {
    LogConfig::for_program(name).init()
}
