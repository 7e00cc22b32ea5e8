// clio-cli/src/cli.rs
//
// Defines the command-line argument structure using clap, together with the
// usage text installed in place of clap's default help layout.

use clap::Parser;
use clio_core::UsageText;
use std::path::PathBuf;

use crate::config::PROGRAM_NAME;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME)]
pub struct Cli {
    /// Count lines
    #[arg(short, long)]
    pub lines: bool,

    /// Count words
    #[arg(short, long)]
    pub words: bool,

    /// Count bytes
    #[arg(short = 'c', long)]
    pub bytes: bool,

    /// Print version information and exit
    #[arg(short = 'v', long = "version")]
    pub show_info: bool,

    /// Input files; standard input is read when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Which counts go into each report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
}

impl Cli {
    /// The counts requested on the command line; all of them when no
    /// counting flag was given.
    pub fn selection(&self) -> Selection {
        if !(self.lines || self.words || self.bytes) {
            return Selection {
                lines: true,
                words: true,
                bytes: true,
            };
        }
        Selection {
            lines: self.lines,
            words: self.words,
            bytes: self.bytes,
        }
    }
}

/// Help text shown for `-h`/`--help` and under argument errors.
pub fn usage_text() -> UsageText {
    UsageText::new(
        format!("{} [-l] [-w] [-c] [-v] [FILE...]", PROGRAM_NAME),
        "Counts the lines, words and bytes of each input file.",
        format!("{} -l notes.txt todo.txt", PROGRAM_NAME),
    )
}
