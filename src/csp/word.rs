#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Candidate words.
//!
//! A `Word` is stored as characters rather than bytes so that overlap offsets
//! and slot lengths agree for non-ASCII vocabularies. Most crossword entries
//! fit in the inline buffer and never touch the heap.

use smallvec::SmallVec;
use std::fmt::Display;
use std::ops::Index;

/// Words up to this many characters are stored inline.
pub const INLINE_WORD_LENGTH: usize = 15;

/// An immutable character sequence. Equality is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Word(SmallVec<[char; INLINE_WORD_LENGTH]>);

impl Word {
    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the word has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character at `index`, if the word is long enough.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }

    /// The characters in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for Word {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
