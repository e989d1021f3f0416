#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The domain store: which words are still feasible for each slot.
//!
//! Every domain starts as a copy of the full vocabulary and only ever
//! shrinks. Words keep the order in which the vocabulary listed them, which
//! is the enumeration order used to break ties when values are ranked.

use crate::csp::variable::Variable;
use crate::csp::word::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::ops::Index;

/// Candidate words for one slot. Never holds the same word twice.
pub type Domain = Vec<Word>;

/// Every slot's domain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domains(FxHashMap<Variable, Domain>);

impl Index<&Variable> for Domains {
    type Output = Domain;

    fn index(&self, index: &Variable) -> &Self::Output {
        &self.0[index]
    }
}

impl Domains {
    /// Gives every variable the whole vocabulary, dropping repeated words.
    #[must_use]
    pub fn new<'a>(
        variables: impl IntoIterator<Item = &'a Variable>,
        vocabulary: impl IntoIterator<Item = &'a Word>,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let words: Domain = vocabulary
            .into_iter()
            .filter(|w| seen.insert(*w))
            .cloned()
            .collect();

        Self(
            variables
                .into_iter()
                .map(|v| (*v, words.clone()))
                .collect(),
        )
    }

    /// The candidate domain of `var`, if it is a known slot.
    #[must_use]
    pub fn get(&self, var: &Variable) -> Option<&Domain> {
        self.0.get(var)
    }

    /// Number of candidates left for `var`; zero for unknown slots.
    #[must_use]
    pub fn size(&self, var: &Variable) -> usize {
        self.0.get(var).map_or(0, Vec::len)
    }

    /// Keeps only the candidates of `var` matching `keep`, returning how many were removed.
    pub fn retain<F: FnMut(&Word) -> bool>(&mut self, var: &Variable, mut keep: F) -> usize {
        self.0.get_mut(var).map_or(0, |domain| {
            let before = domain.len();
            domain.retain(|w| keep(w));
            before - domain.len()
        })
    }

    /// Removes every word whose length differs from its slot's length.
    ///
    /// Returns the total number of words removed. A domain may end up empty;
    /// that is reported later by arc consistency, not here.
    pub fn enforce_node_consistency(&mut self) -> usize {
        self.0
            .iter_mut()
            .map(|(var, domain)| {
                let before = domain.len();
                domain.retain(|w| w.len() == var.length);
                before - domain.len()
            })
            .sum()
    }

    /// The first variable with no candidates left, if any.
    #[must_use]
    pub fn find_empty(&self) -> Option<Variable> {
        self.0
            .iter()
            .find(|(_, domain)| domain.is_empty())
            .map(|(var, _)| *var)
    }

    /// Iterates over every slot and its candidate domain.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Domain)> {
        self.0.iter()
    }

    /// Total number of candidates across all slots.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::variable::Direction;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::from(*w)).collect()
    }

    #[test]
    fn test_new_deduplicates_and_keeps_order() {
        let v = Variable::new(0, 0, Direction::Across, 3);
        let vocab = words(&["CAT", "DOG", "CAT", "EMU"]);
        let domains = Domains::new(&[v], &vocab);

        assert_eq!(domains[&v], words(&["CAT", "DOG", "EMU"]));
    }

    #[test]
    fn test_node_consistency_soundness() {
        let three = Variable::new(0, 0, Direction::Across, 3);
        let four = Variable::new(1, 0, Direction::Across, 4);
        let vocab = words(&["CAT", "BIRD", "DOG", "FISH", "HORSE"]);
        let mut domains = Domains::new(&[three, four], &vocab);

        let removed = domains.enforce_node_consistency();

        assert_eq!(removed, 3 + 3);
        assert_eq!(domains[&three], words(&["CAT", "DOG"]));
        assert_eq!(domains[&four], words(&["BIRD", "FISH"]));
        for (var, domain) in domains.iter() {
            assert!(domain.iter().all(|w| w.len() == var.length));
        }
    }

    #[test]
    fn test_node_consistency_may_empty_a_domain() {
        let five = Variable::new(0, 0, Direction::Down, 5);
        let vocab = words(&["CAT", "BIRD"]);
        let mut domains = Domains::new(&[five], &vocab);

        domains.enforce_node_consistency();

        assert_eq!(domains.size(&five), 0);
        assert_eq!(domains.find_empty(), Some(five));
    }

    #[test]
    fn test_retain_reports_removed() {
        let v = Variable::new(0, 0, Direction::Across, 3);
        let vocab = words(&["CAT", "COT", "DOG"]);
        let mut domains = Domains::new(&[v], &vocab);

        assert_eq!(domains.retain(&v, |w| w[0] == 'C'), 1);
        assert_eq!(domains.size(&v), 2);
        assert_eq!(domains.total(), 2);
    }
}
