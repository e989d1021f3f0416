#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::csp::error::CspError;
use std::path::PathBuf;

/// Errors raised while loading, building or saving a crossword.
#[derive(Debug, thiserror::Error)]
pub enum CrosswordError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The structure text contains no rows.
    #[error("structure is empty")]
    EmptyStructure,

    /// No run of two or more open cells exists, so there is nothing to fill.
    #[error("structure has no slots of two or more open cells")]
    NoSlots,

    /// No structure or word list was given.
    #[error("no structure or word list given; usage: crossword <STRUCTURE> <WORDS> [OUTPUT]")]
    MissingInput,

    /// The geometry derived from the structure is malformed.
    #[error(transparent)]
    Csp(#[from] CspError),
}

impl CrosswordError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
