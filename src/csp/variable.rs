#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Slots of the puzzle, the variables of the constraint problem.

use std::fmt::Display;

/// Orientation of a slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Direction {
    /// Reads left to right along a row.
    #[default]
    Across,
    /// Reads top to bottom along a column.
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A word position in the grid.
///
/// Two variables are the same slot iff all four fields match, so `Variable`
/// is used directly as a map key everywhere in the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Variable {
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
    /// Which way the slot reads.
    pub direction: Direction,
    /// Number of cells covered.
    pub length: usize,
}

impl Variable {
    /// A slot starting at `(row, col)`.
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Grid coordinates `(row, col)` of every cell in the slot, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        })
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_structural_equality() {
        let a = Variable::new(0, 1, Direction::Across, 3);
        let b = Variable::new(0, 1, Direction::Across, 3);
        let c = Variable::new(0, 1, Direction::Down, 3);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: FxHashSet<Variable> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_cells() {
        let across = Variable::new(2, 1, Direction::Across, 3);
        let down = Variable::new(2, 1, Direction::Down, 3);

        assert_eq!(across.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(down.cells().collect::<Vec<_>>(), vec![(2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn test_display() {
        let v = Variable::new(4, 0, Direction::Down, 5);
        assert_eq!(v.to_string(), "(4, 0) down : 5");
    }
}
