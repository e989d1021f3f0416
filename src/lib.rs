#![deny(missing_docs)]
//! This crate fills crossword grids from a word list by treating the puzzle as a
//! constraint satisfaction problem (node consistency, AC-3 and backtracking search).

/// The `csp` module implements the solver: domains, arc consistency, heuristics and search.
pub mod csp;

/// The `crossword` module parses grid structures and word lists and renders filled grids.
pub mod crossword;

/// The `log` module sets up the `env_logger` backend for the binary.
pub mod log;
