//! Custom help text for clap-based programs.
//!
//! [`UsageText`] replaces clap's help layout with a short block:
//!
//! ```text
//! Usage: prog [-x] FILE
//! Does a thing.
//! Example: prog -x data.txt
//! Options:
//!   -x  ...
//! ```
//!
//! The usage line is also what clap prints under a parse error. Nothing is
//! written when the text is installed; clap renders it on `-h`/`--help` or
//! on a bad command line and decides itself whether to exit.

use std::ffi::OsString;

use clap::{Command, Parser};

// Caller text is passed through clap's own fields, never spliced into the
// template, so braces in it are printed literally.
const HELP_TEMPLATE: &str = "Usage: {usage}\n{about}\nOptions:\n{options}";

/// Usage line, one-sentence purpose and example invocation of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageText {
    pub usage: String,
    pub purpose: String,
    pub example: String,
}

impl UsageText {
    pub fn new(
        usage: impl Into<String>,
        purpose: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            usage: usage.into(),
            purpose: purpose.into(),
            example: example.into(),
        }
    }

    /// Installs this text as the help renderer of `cmd`.
    pub fn apply(&self, cmd: Command) -> Command {
        // A derived long description would replace the block under --help.
        cmd.override_usage(self.usage.clone())
            .about(format!("{}\nExample: {}", self.purpose, self.example))
            .long_about(None::<&'static str>)
            .help_template(HELP_TEMPLATE)
    }

    /// Parses the process arguments into `T` with this help text installed.
    ///
    /// Like [`Parser::parse`], prints help or the error and exits when the
    /// command line asks for it.
    pub fn parse<T: Parser>(&self) -> T {
        let mut cmd = self.apply(T::command());
        let matches = cmd.get_matches_mut();
        T::from_arg_matches(&matches).unwrap_or_else(|e| e.format(&mut cmd).exit())
    }

    /// Parses `args` into `T` with this help text installed, returning clap's
    /// error (help requests included) instead of exiting.
    pub fn try_parse_from<T, I, A>(&self, args: I) -> Result<T, clap::Error>
    where
        T: Parser,
        I: IntoIterator<Item = A>,
        A: Into<OsString> + Clone,
    {
        let mut cmd = self.apply(T::command());
        let matches = cmd.try_get_matches_from_mut(args)?;
        T::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))
    }
}
