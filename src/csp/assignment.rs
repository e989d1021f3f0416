#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::csp::variable::Variable;
use crate::csp::word::Word;
use rustc_hash::FxHashMap;
use std::ops::Index;

/// A partial mapping from slots to chosen words, at most one word per slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment(FxHashMap<Variable, Word>);

impl Index<&Variable> for Assignment {
    type Output = Word;

    fn index(&self, index: &Variable) -> &Self::Output {
        &self.0[index]
    }
}

impl Assignment {
    /// An assignment with no slot filled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `word` in `var`, returning the word it replaced.
    pub fn assign(&mut self, var: Variable, word: Word) -> Option<Word> {
        self.0.insert(var, word)
    }

    /// Clears `var`, returning the word it held.
    pub fn unassign(&mut self, var: &Variable) -> Option<Word> {
        self.0.remove(var)
    }

    /// The word in `var`, if any.
    #[must_use]
    pub fn get(&self, var: &Variable) -> Option<&Word> {
        self.0.get(var)
    }

    /// Whether `var` holds a word.
    #[must_use]
    pub fn is_assigned(&self, var: &Variable) -> bool {
        self.0.contains_key(var)
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every one of `variables` has a word.
    #[must_use]
    pub fn is_complete(&self, variables: &[Variable]) -> bool {
        variables.iter().all(|v| self.is_assigned(v))
    }

    /// Filled slots and their words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Word)> + Clone {
        self.0.iter()
    }
}

impl FromIterator<(Variable, Word)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, Word)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
