//! Implementation of the counting action.
//!
//! Every input is read once through clio-core's file iterator. One report
//! line is written per input as soon as it has been counted, so a missing
//! file later in the list stops the run after the earlier lines are out.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clio_core::FileIterator;
use log::debug;

use crate::cli::{Cli, Selection};
use crate::error::{CliErrorContext, CliResult};

/// Line, word and byte counts of one input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub lines: u64,
    pub words: u64,
    pub bytes: u64,
}

impl Counts {
    /// Reads `reader` to the end and counts it.
    ///
    /// Words are runs of non-whitespace bytes; content need not be UTF-8.
    pub fn from_reader(reader: &mut dyn BufRead) -> io::Result<Self> {
        let mut counts = Counts::default();
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader.read_until(b'\n', &mut line)?;
            if read == 0 {
                break;
            }
            counts.bytes += read as u64;
            if line.last() == Some(&b'\n') {
                counts.lines += 1;
            }
            counts.words += line
                .split(|b| b.is_ascii_whitespace())
                .filter(|word| !word.is_empty())
                .count() as u64;
        }
        Ok(counts)
    }

    fn add(&mut self, other: Counts) {
        self.lines += other.lines;
        self.words += other.words;
        self.bytes += other.bytes;
    }

    /// Tab-separated selected counts.
    pub fn format(&self, selection: Selection) -> String {
        let mut fields = Vec::with_capacity(3);
        if selection.lines {
            fields.push(self.lines.to_string());
        }
        if selection.words {
            fields.push(self.words.to_string());
        }
        if selection.bytes {
            fields.push(self.bytes.to_string());
        }
        fields.join("\t")
    }
}

/// Per-run state handed to every handler invocation.
pub struct Report<'a, W> {
    out: W,
    selection: Selection,
    names: &'a [PathBuf],
    next: usize,
    total: Counts,
    // First failed write to `out`; reported after iteration, not as a read error.
    write_error: Option<io::Error>,
}

impl<'a, W: Write> Report<'a, W> {
    pub fn new(out: W, selection: Selection, names: &'a [PathBuf]) -> Self {
        Self {
            out,
            selection,
            names,
            next: 0,
            total: Counts::default(),
            write_error: None,
        }
    }

    /// Writes the line for the next input. Standard input has no name column.
    ///
    /// After a failed write nothing more is written; the error comes back
    /// from [`Report::finish`].
    pub fn record(&mut self, counts: Counts) {
        let name = self.names.get(self.next);
        self.next += 1;
        self.total.add(counts);
        if self.write_error.is_some() {
            return;
        }

        let written = match name {
            Some(path) => {
                debug!("{}: {:?}", path.display(), counts);
                writeln!(self.out, "{}\t{}", counts.format(self.selection), display_name(path))
            }
            None => writeln!(self.out, "{}", counts.format(self.selection)),
        };
        if let Err(e) = written {
            self.write_error = Some(e);
        }
    }

    /// Writes the `total` line when more than one file was counted.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.write_error.take() {
            return Err(e);
        }
        if self.names.len() > 1 {
            writeln!(self.out, "{}\ttotal", self.total.format(self.selection))?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Counts `files` (or the iterator's standard input when `files` is empty)
/// and writes the report to `out`.
pub fn count_inputs<R, W>(
    inputs: &mut FileIterator<R>,
    files: &[PathBuf],
    selection: Selection,
    out: W,
) -> CliResult<W>
where
    R: BufRead,
    W: Write,
{
    let mut report = Report::new(out, selection, files);
    inputs.for_each(files, &mut report, |reader, report| {
        report.record(Counts::from_reader(reader)?);
        Ok(())
    })?;
    report.finish().cli_context("failed to write report")
}

/// Runs the counting action for the parsed command line.
pub fn run_count(cli: &Cli) -> CliResult<()> {
    let stdout = io::stdout();
    count_inputs(
        &mut FileIterator::new(),
        &cli.files,
        cli.selection(),
        stdout.lock(),
    )?;
    Ok(())
}

/// Display name used in the report for `path`.
pub fn display_name(path: &Path) -> String {
    path.display().to_string()
}
