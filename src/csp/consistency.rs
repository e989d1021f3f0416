#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The consistency predicate shared by search and verification.

use crate::csp::assignment::Assignment;
use crate::csp::geometry::Geometry;
use itertools::Itertools;

/// Checks a (possibly partial) assignment against the binary constraints.
///
/// Returns `false` if two distinct slots hold the same word, or if two
/// crossing slots disagree at their overlap. Unassigned slots impose nothing.
/// Cost is quadratic in the number of assigned slots and independent of
/// domain sizes.
pub fn consistent<G: Geometry + ?Sized>(geometry: &G, assignment: &Assignment) -> bool {
    assignment
        .iter()
        .tuple_combinations()
        .all(|((x, word_x), (y, word_y))| {
            if word_x == word_y {
                return false;
            }
            geometry
                .overlap(x, y)
                .is_none_or(|(i, j)| {
                    matches!((word_x.get(i), word_y.get(j)), (Some(a), Some(b)) if a == b)
                })
        })
}

/// Whether `assignment` is a full fill of `geometry`.
///
/// Every slot must hold a word of exactly its length, and the whole
/// assignment must pass [`consistent`].
pub fn is_solution<G: Geometry + ?Sized>(geometry: &G, assignment: &Assignment) -> bool {
    assignment.is_complete(geometry.variables())
        && assignment.len() == geometry.variables().len()
        && assignment.iter().all(|(var, word)| word.len() == var.length)
        && consistent(geometry, assignment)
}
