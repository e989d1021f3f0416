#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solver interface and its static configuration.

use crate::csp::assignment::Assignment;
use crate::csp::value_ordering::{LeastConstrainingValue, ValueOrdering, ValueOrderingImpls};
use crate::csp::variable_selection::{
    MinimumRemainingValues, VariableSelection, VariableSelectionImpls,
};
use std::fmt::Debug;

/// Picks the heuristics a solver is built with.
pub trait SolverConfig: Debug + Clone {
    /// How the next slot to fill is chosen.
    type VariableSelector: VariableSelection + Debug + Clone + Default;
    /// How a slot's candidate words are ordered.
    type ValueOrder: ValueOrdering + Debug + Clone + Default;
}

/// Minimum remaining values with degree tie-break, least constraining value first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultConfig;

impl SolverConfig for DefaultConfig {
    type VariableSelector = MinimumRemainingValues;
    type ValueOrder = LeastConstrainingValue;
}

/// Heuristics chosen at runtime, e.g. from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DynamicConfig;

impl SolverConfig for DynamicConfig {
    type VariableSelector = VariableSelectionImpls;
    type ValueOrder = ValueOrderingImpls;
}

/// Counters collected over one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolutionStats {
    /// Words removed for having the wrong length.
    pub node_pruned: usize,
    /// Words removed by arc consistency.
    pub arc_pruned: usize,
    /// Arcs taken off the AC-3 worklist.
    pub arcs_processed: usize,
    /// Revisions that removed at least one word.
    pub revisions: usize,
    /// Tentative assignments made during search.
    pub decisions: usize,
    /// Tentative assignments undone.
    pub backtracks: usize,
    /// Evaluations of the consistency predicate.
    pub consistency_checks: usize,
    /// Search stopped at the deadline rather than running to completion.
    pub timed_out: bool,
}

/// A crossword solver. One instance serves one solve.
pub trait Solver {
    /// Runs the solve, returning a complete consistent assignment or `None`.
    fn solve(&mut self) -> Option<Assignment>;

    /// Counters collected so far.
    fn stats(&self) -> SolutionStats;
}
