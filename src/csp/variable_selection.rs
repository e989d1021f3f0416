#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Strategies for choosing which slot to fill next.
//!
//! Selection only affects how quickly a solution is found, never whether the
//! returned one is valid. [`MinimumRemainingValues`] is the default; the
//! others exist for comparison in benchmarks and from the command line.

use crate::csp::assignment::Assignment;
use crate::csp::domain::Domains;
use crate::csp::geometry::Geometry;
use crate::csp::variable::Variable;
use clap::ValueEnum;
use std::cmp::Reverse;
use std::fmt::Display;

/// Decides which unfilled slot search tries next.
pub trait VariableSelection {
    /// Picks a slot not yet in `assignment`, or `None` if every slot is filled.
    fn pick<G: Geometry + ?Sized>(
        &mut self,
        geometry: &G,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<Variable>;
}

fn unassigned<'a, G: Geometry + ?Sized>(
    geometry: &'a G,
    assignment: &'a Assignment,
) -> impl Iterator<Item = &'a Variable> + 'a {
    geometry
        .variables()
        .iter()
        .filter(move |v| !assignment.is_assigned(v))
}

/// Fewest remaining candidates first, ties going to the slot with the most
/// neighbours, then to the earliest slot in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimumRemainingValues;

impl VariableSelection for MinimumRemainingValues {
    fn pick<G: Geometry + ?Sized>(
        &mut self,
        geometry: &G,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<Variable> {
        unassigned(geometry, assignment)
            .min_by_key(|v| (domains.size(v), Reverse(geometry.neighbors(v).len())))
            .copied()
    }
}

/// Slots in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedOrder;

impl VariableSelection for FixedOrder {
    fn pick<G: Geometry + ?Sized>(
        &mut self,
        geometry: &G,
        _: &Domains,
        assignment: &Assignment,
    ) -> Option<Variable> {
        unassigned(geometry, assignment).next().copied()
    }
}

/// A uniformly random unassigned slot, reproducible from a seed.
#[derive(Debug, Clone)]
pub struct RandomOrder(fastrand::Rng);

impl RandomOrder {
    /// A generator seeded with `seed`, for reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for RandomOrder {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}

impl VariableSelection for RandomOrder {
    fn pick<G: Geometry + ?Sized>(
        &mut self,
        geometry: &G,
        _: &Domains,
        assignment: &Assignment,
    ) -> Option<Variable> {
        let candidates: Vec<Variable> = unassigned(geometry, assignment).copied().collect();
        self.0.choice(candidates)
    }
}

/// Selection strategies selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VariableSelectionType {
    /// Minimum remaining values, then highest degree.
    #[default]
    Mrv,
    /// Canonical grid order.
    Fixed,
    /// Random order.
    Random,
}

impl Display for VariableSelectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mrv => write!(f, "mrv"),
            Self::Fixed => write!(f, "fixed"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl VariableSelectionType {
    /// Builds the strategy; `seed` only matters for [`Self::Random`].
    #[must_use]
    pub fn to_impl(self, seed: Option<u64>) -> VariableSelectionImpls {
        match self {
            Self::Mrv => VariableSelectionImpls::Mrv(MinimumRemainingValues),
            Self::Fixed => VariableSelectionImpls::Fixed(FixedOrder),
            Self::Random => VariableSelectionImpls::Random(
                seed.map_or_else(RandomOrder::default, RandomOrder::with_seed),
            ),
        }
    }
}

/// Dispatches to one of the concrete strategies.
#[derive(Debug, Clone)]
pub enum VariableSelectionImpls {
    /// See [`MinimumRemainingValues`].
    Mrv(MinimumRemainingValues),
    /// See [`FixedOrder`].
    Fixed(FixedOrder),
    /// See [`RandomOrder`].
    Random(RandomOrder),
}

impl Default for VariableSelectionImpls {
    fn default() -> Self {
        Self::Mrv(MinimumRemainingValues)
    }
}

impl VariableSelection for VariableSelectionImpls {
    fn pick<G: Geometry + ?Sized>(
        &mut self,
        geometry: &G,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<Variable> {
        match self {
            Self::Mrv(s) => s.pick(geometry, domains, assignment),
            Self::Fixed(s) => s.pick(geometry, domains, assignment),
            Self::Random(s) => s.pick(geometry, domains, assignment),
        }
    }
}
