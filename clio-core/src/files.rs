//! Iteration over the input files of a command-line program.
//!
//! A program hands over the file arguments it was given and a handler. Each
//! file is opened in turn, passed to the handler and closed again before the
//! next one is opened. Without any file arguments the handler reads standard
//! input instead, which is left open afterwards.
//!
//! ```rust,no_run
//! use std::io::BufRead;
//!
//! let paths = vec!["a.txt".to_string(), "b.txt".to_string()];
//! let mut lines = 0usize;
//! clio_core::parse_files(&paths, &mut lines, |reader, lines| {
//!     for line in reader.lines() {
//!         line?;
//!         *lines += 1;
//!     }
//!     Ok(())
//! })
//! .unwrap();
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CoreError, CoreResult};

/// Name used for standard input in error messages.
pub const STDIN_NAME: &str = "<stdin>";

/// Feeds input files, or standard input when there are none, to a handler.
///
/// `R` is the stream used in place of files. Programs use [`FileIterator::new`]
/// which locks the process's standard input; tests inject any `BufRead`.
pub struct FileIterator<R> {
    stdin: R,
}

impl FileIterator<StdinLock<'static>> {
    pub fn new() -> Self {
        Self::with_stdin(io::stdin().lock())
    }
}

impl Default for FileIterator<StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> FileIterator<R> {
    /// Uses `stdin` as the fallback stream instead of the process's standard input.
    pub fn with_stdin(stdin: R) -> Self {
        Self { stdin }
    }

    /// Gives back the fallback stream. It is never closed by the iterator.
    pub fn into_stdin(self) -> R {
        self.stdin
    }

    /// Runs `handler` once per path, in order, or once on the fallback stream
    /// when `paths` is empty.
    ///
    /// `ctx` is passed through to every invocation. Iteration stops at the
    /// first file that cannot be opened ([`CoreError::FileOpen`]) or the first
    /// handler failure ([`CoreError::Read`]); no later path is touched.
    ///
    /// Returns the number of streams given to the handler.
    pub fn for_each<P, C, F>(&mut self, paths: &[P], ctx: &mut C, mut handler: F) -> CoreResult<usize>
    where
        P: AsRef<Path>,
        F: FnMut(&mut dyn BufRead, &mut C) -> io::Result<()>,
    {
        if paths.is_empty() {
            debug!("No input files, reading {}", STDIN_NAME);
            handler(&mut self.stdin, ctx).map_err(|source| CoreError::Read {
                path: PathBuf::from(STDIN_NAME),
                source,
            })?;
            return Ok(1);
        }

        for path in paths {
            let path = path.as_ref();
            let file = File::open(path).map_err(|source| CoreError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("Reading {}", path.display());

            let mut reader = BufReader::new(file);
            handler(&mut reader, ctx).map_err(|source| CoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            // `reader` owns the file and is dropped here, before the next open.
        }

        Ok(paths.len())
    }
}

/// Runs `handler` over `paths`, or over standard input when `paths` is empty.
///
/// Shorthand for `FileIterator::new().for_each(paths, ctx, handler)`.
pub fn parse_files<P, C, F>(paths: &[P], ctx: &mut C, handler: F) -> CoreResult<usize>
where
    P: AsRef<Path>,
    F: FnMut(&mut dyn BufRead, &mut C) -> io::Result<()>,
{
    FileIterator::new().for_each(paths, ctx, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{Cursor, Read};
    use tempfile::tempdir;

    fn read_all(reader: &mut dyn BufRead, seen: &mut Vec<String>) -> io::Result<()> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        seen.push(content);
        Ok(())
    }

    #[test]
    fn test_empty_paths_read_stdin_once() {
        let mut iter = FileIterator::with_stdin(Cursor::new(b"from stdin\n".to_vec()));
        let mut seen = Vec::new();
        let paths: Vec<PathBuf> = Vec::new();

        let count = iter.for_each(&paths, &mut seen, read_all).unwrap();

        assert_eq!(count, 1);
        assert_eq!(seen, vec!["from stdin\n".to_string()]);
    }

    #[test]
    fn test_stdin_is_left_open() {
        let mut iter = FileIterator::with_stdin(Cursor::new(b"first\nsecond\n".to_vec()));
        let mut first = String::new();
        let paths: [&str; 0] = [];

        iter.for_each(&paths, &mut first, |reader, first| {
            reader.read_line(first).map(|_| ())
        })
        .unwrap();
        assert_eq!(first, "first\n");

        let mut rest = String::new();
        iter.into_stdin().read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "second\n");
    }

    #[test]
    fn test_files_are_processed_in_order() {
        let dir = tempdir().unwrap();
        let names = ["b.txt", "a.txt", "c.txt"];
        let paths: Vec<PathBuf> = names
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                fs::write(&path, format!("contents of {}", name)).unwrap();
                path
            })
            .collect();

        let mut iter = FileIterator::with_stdin(Cursor::new(b"unused".to_vec()));
        let mut seen = Vec::new();
        let count = iter.for_each(&paths, &mut seen, read_all).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            seen,
            vec!["contents of b.txt", "contents of a.txt", "contents of c.txt"]
        );

        // Standard input is untouched when files are given.
        let mut stdin = String::new();
        iter.into_stdin().read_to_string(&mut stdin).unwrap();
        assert_eq!(stdin, "unused");
    }

    #[test]
    fn test_missing_file_stops_iteration() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let missing = dir.path().join("missing.txt");
        let last = dir.path().join("last.txt");
        fs::write(&first, "1").unwrap();
        fs::write(&last, "3").unwrap();

        let paths = vec![first, missing.clone(), last];
        let mut iter = FileIterator::with_stdin(Cursor::new(Vec::new()));
        let mut seen = Vec::new();
        let err = iter.for_each(&paths, &mut seen, read_all).unwrap_err();

        match err {
            CoreError::FileOpen { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected FileOpen, got {:?}", other),
        }
        assert_eq!(seen, vec!["1".to_string()]);
    }

    #[test]
    fn test_file_open_error_names_the_path() {
        let paths = ["surely/this/does/not/exist.txt"];
        let mut iter = FileIterator::with_stdin(Cursor::new(Vec::new()));
        let err = iter.for_each(&paths, &mut (), |_, _| Ok(())).unwrap_err();

        assert!(
            err.to_string()
                .starts_with("couldn't open \"surely/this/does/not/exist.txt\"")
        );
    }

    #[test]
    fn test_handler_error_reports_path_and_stops() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.txt");
        let never = dir.path().join("never.txt");
        fs::write(&bad, "x").unwrap();
        fs::write(&never, "y").unwrap();

        let mut calls = 0;
        let mut iter = FileIterator::with_stdin(Cursor::new(Vec::new()));
        let err = iter
            .for_each(&[bad.clone(), never], &mut calls, |_, calls| {
                *calls += 1;
                Err(io::Error::new(io::ErrorKind::InvalidData, "not text"))
            })
            .unwrap_err();

        assert_eq!(calls, 1);
        match err {
            CoreError::Read { path, .. } => assert_eq!(path, bad),
            other => panic!("Expected Read, got {:?}", other),
        }
    }

    #[test]
    fn test_stdin_handler_error_uses_stdin_name() {
        let mut iter = FileIterator::with_stdin(Cursor::new(Vec::new()));
        let paths: [&str; 0] = [];
        let err = iter
            .for_each(&paths, &mut (), |_, _| {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            })
            .unwrap_err();

        assert!(err.to_string().contains(STDIN_NAME));
    }
}
