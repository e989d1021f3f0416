#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The view of the puzzle layout that the solver works against.
//!
//! The solver never looks at grid cells. It only needs the set of slots,
//! which slots cross each other, and at which character positions. Those
//! three queries form the [`Geometry`] trait. [`OverlapMap`] is the concrete
//! store: overlaps are kept in a map keyed by the ordered slot pair rather
//! than on the slots themselves, which keeps `Variable` a plain value.

use crate::csp::error::CspError;
use crate::csp::variable::Variable;
use rustc_hash::{FxHashMap, FxHashSet};

/// Character offsets `(in first slot, in second slot)` that must hold the same letter.
pub type Overlap = (usize, usize);

/// Layout queries consumed by the solver.
pub trait Geometry {
    /// Every slot, in canonical order.
    fn variables(&self) -> &[Variable];

    /// Slots that cross `var`, in canonical order. Empty for unknown slots.
    fn neighbors(&self, var: &Variable) -> &[Variable];

    /// Offsets at which `x` and `y` must agree, or `None` if they do not cross.
    fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap>;

    /// Checks the layout is well formed before any solving starts.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a zero-length slot, a neighbour that
    /// is unknown, the slot itself, or shares no overlap, an offset past the
    /// end of its slot, or an overlap whose reverse direction does not mirror it.
    fn validate(&self) -> Result<(), CspError> {
        if let Some(variable) = self.variables().iter().find(|v| v.length == 0) {
            return Err(CspError::ZeroLength {
                variable: *variable,
            });
        }

        let known: FxHashSet<&Variable> = self.variables().iter().collect();

        for x in self.variables() {
            for y in self.neighbors(x) {
                if !known.contains(y) {
                    return Err(CspError::UnknownVariable { variable: *y });
                }
                if x == y {
                    return Err(CspError::SelfOverlap { variable: *x });
                }
                let Some((i, j)) = self.overlap(x, y) else {
                    return Err(CspError::MissingOverlap {
                        first: *x,
                        second: *y,
                    });
                };
                if i >= x.length {
                    return Err(CspError::OffsetOutOfBounds {
                        variable: *x,
                        offset: i,
                    });
                }
                if j >= y.length {
                    return Err(CspError::OffsetOutOfBounds {
                        variable: *y,
                        offset: j,
                    });
                }
                if self.overlap(y, x) != Some((j, i)) {
                    return Err(CspError::AsymmetricOverlap {
                        first: *x,
                        second: *y,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Overlaps keyed by ordered slot pair, plus the neighbour lists they imply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlapMap {
    variables: Vec<Variable>,
    overlaps: FxHashMap<(Variable, Variable), Overlap>,
    neighbors: FxHashMap<Variable, Vec<Variable>>,
}

impl OverlapMap {
    /// Creates a map over `variables` with no crossings yet.
    #[must_use]
    pub fn new(variables: Vec<Variable>) -> Self {
        Self {
            variables,
            overlaps: FxHashMap::default(),
            neighbors: FxHashMap::default(),
        }
    }

    /// Records that cell `offsets.0` of `x` is cell `offsets.1` of `y`.
    ///
    /// Both directions are stored, `(x, y) -> (i, j)` and `(y, x) -> (j, i)`.
    pub fn insert(&mut self, x: Variable, y: Variable, offsets: Overlap) {
        let (i, j) = offsets;
        if self.overlaps.insert((x, y), (i, j)).is_none() {
            self.neighbors.entry(x).or_default().push(y);
        }
        if self.overlaps.insert((y, x), (j, i)).is_none() {
            self.neighbors.entry(y).or_default().push(x);
        }
    }

    /// Number of ordered slot pairs that cross.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlaps.len()
    }

    /// Whether no two slots cross.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlaps.is_empty()
    }

    /// Every ordered pair of distinct crossing slots, in canonical order.
    pub fn arcs(&self) -> impl Iterator<Item = (Variable, Variable)> + '_ {
        self.variables
            .iter()
            .flat_map(move |x| self.neighbors(x).iter().map(move |y| (*x, *y)))
    }

    /// Re-sorts every neighbor list into the order of `variables`.
    pub(crate) fn sort_neighbors(&mut self) {
        let position: FxHashMap<Variable, usize> = self
            .variables
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();

        for list in self.neighbors.values_mut() {
            list.sort_by_key(|v| position.get(v).copied().unwrap_or(usize::MAX));
        }
    }

    #[cfg(test)]
    pub(crate) fn insert_one_way(&mut self, x: Variable, y: Variable, offsets: Overlap) {
        self.overlaps.insert((x, y), offsets);
        self.neighbors.entry(x).or_default().push(y);
    }
}

impl Geometry for OverlapMap {
    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn neighbors(&self, var: &Variable) -> &[Variable] {
        self.neighbors
            .get(var)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.get(&(*x, *y)).copied()
    }
}
