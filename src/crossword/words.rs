#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for word-list files.
//!
//! The format is one candidate word per line. Each line is trimmed and
//! upper-cased; blank lines are skipped. A word that appears more than once
//! is kept only at its first position, so the list order (which drives the
//! order domains are tried in) is stable.

use crate::crossword::error::CrosswordError;
use crate::csp::word::Word;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses a word list from a `BufRead` source.
///
/// # Errors
///
/// Returns the underlying `io::Error` if a line cannot be read or is not valid UTF-8.
pub fn parse_words<R: BufRead>(reader: R) -> std::io::Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let upper = trimmed.to_uppercase();
        if seen.insert(upper.clone()) {
            words.push(Word::from(upper));
        }
    }

    Ok(words)
}

/// Reads a word-list file specified by its path.
///
/// # Errors
///
/// Returns [`CrosswordError::Io`] if the file cannot be opened or read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CrosswordError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CrosswordError::io(path, e))?;
    parse_words(BufReader::new(file)).map_err(|e| CrosswordError::io(path, e))
}
