#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking search over slot assignments.
//!
//! Solving runs in three phases:
//! 1.  **Node consistency:** drop every word of the wrong length.
//! 2.  **Arc consistency:** run AC-3 over every crossing. If a domain
//!     empties the puzzle has no fill and search is skipped entirely.
//! 3.  **Search:** depth-first, one slot at a time. The next slot comes from
//!     the configured `VariableSelection`, its words are tried in the order
//!     given by the configured `ValueOrdering`, and each tentative word is
//!     kept only while the consistency predicate holds. A failed branch undoes
//!     its own assignment before the next word is tried.
//!
//! Pruning happens once, up front. Inside the search only the consistency
//! predicate guards correctness, so the heuristics change how long a solve
//! takes but never what counts as a solution.

use crate::csp::arc_consistency::{ArcConsistency, ArcQueue};
use crate::csp::assignment::Assignment;
use crate::csp::consistency;
use crate::csp::domain::Domains;
use crate::csp::error::CspError;
use crate::csp::geometry::Geometry;
use crate::csp::solver::{DefaultConfig, SolutionStats, Solver, SolverConfig};
use crate::csp::value_ordering::ValueOrdering;
use crate::csp::variable::Variable;
use crate::csp::variable_selection::VariableSelection;
use crate::csp::word::Word;
use log::{debug, trace};
use std::time::Instant;

/// A crossword solver over any [`Geometry`].
///
/// Owns its domains exclusively; one instance serves one solve.
#[derive(Debug)]
pub struct Backtracking<'g, G: Geometry + ?Sized, Config: SolverConfig = DefaultConfig> {
    geometry: &'g G,
    domains: Domains,
    selector: Config::VariableSelector,
    value_order: Config::ValueOrder,
    deadline: Option<Instant>,
    stats: SolutionStats,
}

impl<'g, G: Geometry + ?Sized, Config: SolverConfig> Backtracking<'g, G, Config> {
    /// Creates a solver with the configuration's default heuristics.
    ///
    /// # Errors
    ///
    /// Returns a [`CspError`] if `geometry` fails validation.
    pub fn new(geometry: &'g G, vocabulary: &[Word]) -> Result<Self, CspError> {
        Self::from_parts(
            geometry,
            vocabulary,
            Config::VariableSelector::default(),
            Config::ValueOrder::default(),
        )
    }

    /// Creates a solver with explicit heuristics.
    ///
    /// Every slot's domain starts as the whole (deduplicated) vocabulary.
    ///
    /// # Errors
    ///
    /// Returns a [`CspError`] if `geometry` fails validation; no domain is
    /// built in that case.
    pub fn from_parts(
        geometry: &'g G,
        vocabulary: &[Word],
        selector: Config::VariableSelector,
        value_order: Config::ValueOrder,
    ) -> Result<Self, CspError> {
        geometry.validate()?;

        Ok(Self {
            geometry,
            domains: Domains::new(geometry.variables(), vocabulary),
            selector,
            value_order,
            deadline: None,
            stats: SolutionStats::default(),
        })
    }

    /// Stops searching once `deadline` has passed.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Current candidate words per slot.
    #[must_use]
    pub const fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Drops every word whose length differs from its slot.
    pub fn enforce_node_consistency(&mut self) {
        let removed = self.domains.enforce_node_consistency();
        self.stats.node_pruned += removed;
        debug!("node consistency removed {removed} words");
    }

    /// Runs AC-3 from `arcs`, or from every crossing when `None`.
    ///
    /// Returns `false` if some domain ends up empty.
    pub fn ac3(&mut self, arcs: Option<ArcQueue>) -> bool {
        let mut propagator = ArcConsistency::new(self.geometry);
        let consistent = propagator.ac3(&mut self.domains, arcs);

        self.stats.arcs_processed += propagator.arcs_processed;
        self.stats.revisions += propagator.revisions;
        self.stats.arc_pruned += propagator.pruned;
        consistent
    }

    /// Whether `assignment` breaks no binary constraint.
    pub fn consistent(&mut self, assignment: &Assignment) -> bool {
        self.stats.consistency_checks += 1;
        consistency::consistent(self.geometry, assignment)
    }

    /// The next slot to fill, from the configured selector.
    pub fn select_unassigned_variable(&mut self, assignment: &Assignment) -> Option<Variable> {
        self.selector
            .pick(self.geometry, &self.domains, assignment)
    }

    /// `var`'s candidates in the order the configured ordering gives.
    pub fn order_domain_values(&self, var: &Variable, assignment: &Assignment) -> Vec<Word> {
        self.value_order
            .order(self.geometry, &self.domains, var, assignment)
    }

    fn deadline_passed(&mut self) -> bool {
        if self.stats.timed_out {
            return true;
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            debug!("deadline reached after {} decisions", self.stats.decisions);
            self.stats.timed_out = true;
        }
        self.stats.timed_out
    }

    /// Extends `assignment` to a complete consistent one.
    ///
    /// On success returns `true` with `assignment` complete. On failure
    /// returns `false` with `assignment` exactly as it was passed in.
    pub fn backtrack(&mut self, assignment: &mut Assignment) -> bool {
        if self.deadline_passed() {
            return false;
        }

        if assignment.is_complete(self.geometry.variables()) && self.consistent(assignment) {
            return true;
        }

        let Some(var) = self.select_unassigned_variable(assignment) else {
            return false;
        };

        for word in self.order_domain_values(&var, assignment) {
            self.stats.decisions += 1;
            assignment.assign(var, word);

            if self.consistent(assignment) && self.backtrack(assignment) {
                return true;
            }

            trace!("backtracking out of {var}");
            assignment.unassign(&var);
            self.stats.backtracks += 1;

            if self.stats.timed_out {
                return false;
            }
        }

        false
    }
}

impl<G: Geometry + ?Sized, Config: SolverConfig> Solver for Backtracking<'_, G, Config> {
    /// Enforces node then arc consistency, then searches from an empty assignment.
    ///
    /// Returns `None` when AC-3 proves the puzzle unsatisfiable (search is
    /// never entered), when search is exhausted, or when the deadline passes;
    /// [`SolutionStats::timed_out`] tells the last case apart.
    fn solve(&mut self) -> Option<Assignment> {
        self.enforce_node_consistency();

        if !self.ac3(None) {
            debug!("arc consistency left an empty domain; no solution");
            return None;
        }

        let mut assignment = Assignment::new();
        let found = self.backtrack(&mut assignment);
        debug!(
            "search {} after {} decisions and {} backtracks",
            if found { "succeeded" } else { "failed" },
            self.stats.decisions,
            self.stats.backtracks
        );

        found.then_some(assignment)
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}
