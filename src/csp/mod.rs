#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Crossword filling as a constraint satisfaction problem.
//!
//! Each slot of the grid is a [`variable::Variable`] whose domain is the set of
//! vocabulary words of matching length. Crossing slots must agree on the
//! letter in their shared cell, and no word may be used twice. Solving runs
//! node consistency, then AC-3, then backtracking search with pluggable
//! variable-selection and value-ordering heuristics.
//!
//! The grid itself is only seen through the [`geometry::Geometry`] trait.

/// AC-3: the arc worklist and the revise step.
pub mod arc_consistency;

/// Partial mappings from slots to words.
pub mod assignment;

/// The backtracking solver.
pub mod backtracking;

/// The predicate deciding whether an assignment breaks any constraint.
pub mod consistency;

/// Candidate words per slot, and node consistency.
pub mod domain;

/// Errors for malformed geometry.
pub mod error;

/// The `Geometry` trait and the explicit `OverlapMap`.
pub mod geometry;

/// Solver traits, static configurations and statistics.
pub mod solver;

/// Heuristics deciding which candidate word to try first.
pub mod value_ordering;

/// Slots and their directions.
pub mod variable;

/// Heuristics deciding which slot to fill next.
pub mod variable_selection;

/// Words as fixed character sequences.
pub mod word;
