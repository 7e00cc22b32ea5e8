//! Program information banner.
//!
//! Prints the name, version and date of a program followed by its authors and
//! license, e.g. for a `-v` flag:
//!
//! ```text
//! demo 1.0, 2024-01-01
//! Authors:
//! 	1) Ann, ann@x.com
//! 	2) Bo, bo@x.com
//! License: MIT
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::error::{CoreError, CoreResult};

/// One author line of the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Everything the banner shows about a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInfo {
    pub name: String,
    pub version: String,
    pub date: String,
    pub authors: Vec<Author>,
    pub license: String,
}

impl ProgramInfo {
    /// Creates a banner without authors; add them with [`ProgramInfo::with_author`].
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        date: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            date: date.into(),
            authors: Vec::new(),
            license: license.into(),
        }
    }

    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.authors.push(Author::new(name, email));
        self
    }

    /// Banner for a program with exactly one author. Neither field is split.
    pub fn single_author(
        name: &str,
        version: &str,
        date: &str,
        author: &str,
        email: &str,
        license: &str,
    ) -> Self {
        Self::new(name, version, date, license).with_author(author, email)
    }

    /// Builds the banner from comma-separated author names and email addresses.
    ///
    /// The two lists are paired by position. Entries are kept exactly as
    /// written, surrounding whitespace included. Lists of different length
    /// are rejected with [`CoreError::MismatchedAuthorEmailCount`].
    pub fn from_fields(
        name: &str,
        version: &str,
        date: &str,
        authors: &str,
        emails: &str,
        license: &str,
    ) -> CoreResult<Self> {
        let names: Vec<&str> = authors.split(',').collect();
        let addresses: Vec<&str> = emails.split(',').collect();
        if names.len() != addresses.len() {
            return Err(CoreError::MismatchedAuthorEmailCount {
                authors: names.len(),
                emails: addresses.len(),
            });
        }

        Ok(Self {
            authors: names
                .into_iter()
                .zip(addresses)
                .map(|(name, email)| Author::new(name, email))
                .collect(),
            ..Self::new(name, version, date, license)
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Writes the banner to standard output.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()
    }
}

impl fmt::Display for ProgramInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}, {}", self.name, self.version, self.date)?;
        match self.authors.as_slice() {
            [] => {}
            [author] => writeln!(f, "Author: {}, {}", author.name, author.email)?,
            authors => {
                writeln!(f, "Authors:")?;
                for (i, author) in authors.iter().enumerate() {
                    writeln!(f, "\t{}) {}, {}", i + 1, author.name, author.email)?;
                }
            }
        }
        writeln!(f, "License: {}", self.license)
    }
}

/// Prints the banner for comma-separated author and email lists to standard output.
pub fn print_info(
    name: &str,
    version: &str,
    date: &str,
    authors: &str,
    emails: &str,
    license: &str,
) -> CoreResult<()> {
    ProgramInfo::from_fields(name, version, date, authors, emails, license)?.print()?;
    Ok(())
}
