#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Everything around the solver that knows about actual grids: parsing
//! structure and word files, and drawing the result.

/// Errors raised while loading or saving puzzles.
pub mod error;

/// Rendering of filled grids as text, SVG, or a slot listing.
pub mod render;

/// Grid structures and slot extraction.
pub mod structure;

/// Word-list parsing.
pub mod words;
