#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Errors raised for malformed puzzle geometry.
//!
//! An unsatisfiable puzzle is not an error: the solver reports it by
//! returning `None`. These variants cover inputs the solver cannot even
//! start on, and are detected before any domain is initialised.

use crate::csp::variable::Variable;

/// Malformed geometry detected while validating an overlap map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CspError {
    /// A slot covers no cells.
    #[error("slot {variable} has zero length")]
    ZeroLength {
        /// The offending slot.
        variable: Variable,
    },

    /// An overlap names a slot that is not one of the problem's variables.
    #[error("overlap references unknown slot {variable}")]
    UnknownVariable {
        /// The slot that was not found.
        variable: Variable,
    },

    /// An overlap pairs a slot with itself.
    #[error("slot {variable} cannot overlap itself")]
    SelfOverlap {
        /// The offending slot.
        variable: Variable,
    },

    /// An overlap offset does not index a cell of its slot.
    #[error("overlap offset {offset} is out of bounds for slot {variable}")]
    OffsetOutOfBounds {
        /// The slot the offset belongs to.
        variable: Variable,
        /// The offending offset.
        offset: usize,
    },

    /// A slot lists a neighbour it has no overlap with.
    #[error("slots {first} and {second} are neighbours but share no cell")]
    MissingOverlap {
        /// Slot whose neighbour list is wrong.
        first: Variable,
        /// The listed neighbour.
        second: Variable,
    },

    /// The two directions of an overlap disagree.
    #[error("overlap between {first} and {second} is not symmetric")]
    AsymmetricOverlap {
        /// First slot of the pair.
        first: Variable,
        /// Second slot of the pair.
        second: Variable,
    },
}
