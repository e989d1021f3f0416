#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Arc consistency via the AC-3 worklist algorithm.
//!
//! An arc `(x, y)` is consistent when every word left for `x` has at least
//! one word left for `y` with the same letter at their crossing. AC-3 keeps a
//! FIFO queue of arcs still to check; revising `x` against `y` may strip words
//! from `x`, which in turn may leave words in `x`'s other neighbours without
//! support, so those arcs are queued again.

use crate::csp::domain::Domains;
use crate::csp::geometry::Geometry;
use crate::csp::variable::Variable;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// An ordered pair of crossing slots, revised as "first against second".
pub type Arc = (Variable, Variable);

/// FIFO worklist of arcs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArcQueue(VecDeque<Arc>);

impl ArcQueue {
    /// An empty worklist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ordered pair of distinct crossing slots.
    #[must_use]
    pub fn all<G: Geometry + ?Sized>(geometry: &G) -> Self {
        geometry
            .variables()
            .iter()
            .flat_map(|x| geometry.neighbors(x).iter().map(move |y| (*x, *y)))
            .filter(|(x, y)| x != y && geometry.overlap(x, y).is_some())
            .collect()
    }

    /// Queues `arc` behind every arc already waiting.
    pub fn push(&mut self, arc: Arc) {
        self.0.push_back(arc);
    }

    /// Takes the oldest arc.
    pub fn pop(&mut self) -> Option<Arc> {
        self.0.pop_front()
    }

    /// Number of arcs waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no arc is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Arc> for ArcQueue {
    fn from_iter<T: IntoIterator<Item = Arc>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Runs revisions and AC-3 over a geometry, counting the work done.
#[derive(Debug)]
pub struct ArcConsistency<'g, G: Geometry + ?Sized> {
    geometry: &'g G,
    /// Arcs popped from the worklist.
    pub arcs_processed: usize,
    /// Revisions that removed at least one word.
    pub revisions: usize,
    /// Words removed across all revisions.
    pub pruned: usize,
}

impl<'g, G: Geometry + ?Sized> ArcConsistency<'g, G> {
    /// A propagator over `geometry` with zeroed counters.
    #[must_use]
    pub const fn new(geometry: &'g G) -> Self {
        Self {
            geometry,
            arcs_processed: 0,
            revisions: 0,
            pruned: 0,
        }
    }

    /// Makes `x` arc consistent with `y`.
    ///
    /// Removes from `x` every word whose overlap letter appears at the
    /// matching position of no word in `y`. Returns whether anything was
    /// removed; slots that do not cross are left alone.
    pub fn revise(&mut self, domains: &mut Domains, x: &Variable, y: &Variable) -> bool {
        let Some((i, j)) = self.geometry.overlap(x, y) else {
            return false;
        };

        let support: FxHashSet<char> = domains
            .get(y)
            .map(|domain| domain.iter().filter_map(|w| w.get(j)).collect())
            .unwrap_or_default();

        let removed = domains.retain(x, |w| w.get(i).is_some_and(|c| support.contains(&c)));

        if removed > 0 {
            trace!("revised {x} against {y}: removed {removed}");
            self.revisions += 1;
            self.pruned += removed;
        }
        removed > 0
    }

    /// Establishes arc consistency across the whole problem.
    ///
    /// Starts from `arcs` when given, otherwise from every crossing pair.
    /// Returns `false` as soon as some domain is empty, meaning the puzzle
    /// has no solution; returns `true` once the worklist drains.
    pub fn ac3(&mut self, domains: &mut Domains, arcs: Option<ArcQueue>) -> bool {
        if let Some(var) = domains.find_empty() {
            debug!("ac3: {var} has no candidates before propagation");
            return false;
        }

        let mut queue = arcs.unwrap_or_else(|| ArcQueue::all(self.geometry));
        debug!("ac3: starting with {} arcs", queue.len());

        while let Some((x, y)) = queue.pop() {
            self.arcs_processed += 1;

            if !self.revise(domains, &x, &y) {
                continue;
            }

            if domains.size(&x) == 0 {
                debug!("ac3: domain of {x} wiped out by {y}");
                return false;
            }

            // x shrank, so every other neighbour must be re-checked against x.
            for neighbor in self.geometry.neighbors(&x) {
                if *neighbor != y {
                    queue.push((*neighbor, x));
                }
            }
        }

        debug!(
            "ac3: fixed point after {} arcs, {} revisions, {} words pruned",
            self.arcs_processed, self.revisions, self.pruned
        );
        true
    }
}
