#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Grid structures and the slots they define.
//!
//! A structure is plain text, one grid row per line. `_` marks an open cell;
//! any other character is a blocked cell. Rows shorter than the widest row
//! are padded with blocked cells.
//!
//! ```text
//! #___#
//! #_##_
//! #_##_
//! #_##_
//! #____
//! ```
//!
//! Every maximal run of two or more open cells, across or down, becomes a
//! slot. Slots are numbered by scanning cells in row-major order, emitting the
//! across slot starting at a cell before the down slot starting there.

use crate::crossword::error::CrosswordError;
use crate::csp::geometry::{Geometry, Overlap, OverlapMap};
use crate::csp::variable::{Direction, Variable};
use bit_vec::BitVec;
use rustc_hash::FxHashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Character marking an open cell.
pub const OPEN_CELL: char = '_';

/// Character used for blocked cells when a structure is printed.
pub const BLOCKED_CELL: char = '#';

/// A parsed grid: which cells are open, plus the slots and overlaps they imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    height: usize,
    width: usize,
    open: Vec<BitVec>,
    overlaps: OverlapMap,
}

impl Crossword {
    /// Builds a crossword from structure text.
    ///
    /// # Errors
    ///
    /// [`CrosswordError::EmptyStructure`] if there are no rows,
    /// [`CrosswordError::NoSlots`] if no slot can be formed, and
    /// [`CrosswordError::Csp`] if the derived geometry fails validation.
    pub fn parse(text: &str) -> Result<Self, CrosswordError> {
        let rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        if rows.is_empty() {
            return Err(CrosswordError::EmptyStructure);
        }

        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

        let open: Vec<BitVec> = rows
            .iter()
            .map(|row| {
                let mut bits = BitVec::from_elem(width, false);
                for (j, c) in row.chars().enumerate() {
                    bits.set(j, c == OPEN_CELL);
                }
                bits
            })
            .collect();

        let mut crossword = Self {
            height,
            width,
            open,
            overlaps: OverlapMap::default(),
        };

        let variables = crossword.find_variables();
        if variables.is_empty() {
            return Err(CrosswordError::NoSlots);
        }
        crossword.overlaps = Self::find_overlaps(variables);
        crossword.overlaps.validate()?;

        Ok(crossword)
    }

    /// Reads and parses a structure file.
    ///
    /// # Errors
    ///
    /// [`CrosswordError::Io`] if the file cannot be read, otherwise as [`Self::parse`].
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, CrosswordError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| CrosswordError::io(path, e))?;
        Self::parse(&text)
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns, the length of the longest row.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether `(row, col)` is an open cell; out-of-grid cells are blocked.
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open
            .get(row)
            .and_then(|bits| bits.get(col))
            .unwrap_or(false)
    }

    /// The explicit overlap map behind this crossword's [`Geometry`].
    #[must_use]
    pub const fn overlap_map(&self) -> &OverlapMap {
        &self.overlaps
    }

    fn run_length(&self, row: usize, col: usize, direction: Direction) -> usize {
        let mut length = 0;
        loop {
            let (r, c) = match direction {
                Direction::Across => (row, col + length),
                Direction::Down => (row + length, col),
            };
            if !self.is_open(r, c) {
                return length;
            }
            length += 1;
        }
    }

    fn find_variables(&self) -> Vec<Variable> {
        let mut variables = Vec::new();

        for row in 0..self.height {
            for col in 0..self.width {
                if !self.is_open(row, col) {
                    continue;
                }

                if col == 0 || !self.is_open(row, col - 1) {
                    let length = self.run_length(row, col, Direction::Across);
                    if length > 1 {
                        variables.push(Variable::new(row, col, Direction::Across, length));
                    }
                }

                if row == 0 || !self.is_open(row - 1, col) {
                    let length = self.run_length(row, col, Direction::Down);
                    if length > 1 {
                        variables.push(Variable::new(row, col, Direction::Down, length));
                    }
                }
            }
        }

        variables
    }

    fn find_overlaps(variables: Vec<Variable>) -> OverlapMap {
        let mut by_cell: FxHashMap<(usize, usize), Vec<(Variable, usize)>> = FxHashMap::default();
        for var in &variables {
            for (k, cell) in var.cells().enumerate() {
                by_cell.entry(cell).or_default().push((*var, k));
            }
        }

        let mut overlaps = OverlapMap::new(variables);
        for occupants in by_cell.values() {
            for (a, &(x, i)) in occupants.iter().enumerate() {
                for &(y, j) in &occupants[a + 1..] {
                    overlaps.insert(x, y, (i, j));
                }
            }
        }
        overlaps.sort_neighbors();
        overlaps
    }
}

impl FromStr for Crossword {
    type Err = CrosswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Geometry for Crossword {
    fn variables(&self) -> &[Variable] {
        self.overlaps.variables()
    }

    fn neighbors(&self, var: &Variable) -> &[Variable] {
        self.overlaps.neighbors(var)
    }

    fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.overlap(x, y)
    }
}

impl Display for Crossword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if self.is_open(row, col) {
                    OPEN_CELL
                } else {
                    BLOCKED_CELL
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
