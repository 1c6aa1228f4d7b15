//! Search-space enumeration.
//!
//! The grid is deterministic: compound pairs in catalog order, then pit laps in
//! ascending order. Observer notifications and tie-breaking both depend on it.

use crate::domain::Compound;
use crate::error::SimError;

/// Inclusive range of pit laps to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitWindow {
    pub min: u32,
    pub max: u32,
}

impl PitWindow {
    pub fn new(min: u32, max: u32) -> Result<Self, SimError> {
        if min > max {
            return Err(SimError::EmptyPitWindow { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn laps(&self) -> std::ops::RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Number of pit laps in the window (always >= 1).
    pub fn lap_count(&self) -> usize {
        (self.max - self.min) as usize + 1
    }
}

/// Ordered (first stint, second stint) compound choice for a one-stop race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompoundPair {
    pub first: Compound,
    pub second: Compound,
}

impl CompoundPair {
    pub const fn new(first: Compound, second: Compound) -> Self {
        Self { first, second }
    }

    /// Pairs that use two different compounds.
    pub const STANDARD: [CompoundPair; 4] = [
        CompoundPair::new(Compound::Soft, Compound::Medium),
        CompoundPair::new(Compound::Soft, Compound::Hard),
        CompoundPair::new(Compound::Medium, Compound::Hard),
        CompoundPair::new(Compound::Hard, Compound::Medium),
    ];

    /// `STANDARD` plus medium -> medium.
    pub const WITH_SAME_COMPOUND: [CompoundPair; 5] = [
        CompoundPair::new(Compound::Soft, Compound::Medium),
        CompoundPair::new(Compound::Soft, Compound::Hard),
        CompoundPair::new(Compound::Medium, Compound::Hard),
        CompoundPair::new(Compound::Hard, Compound::Medium),
        CompoundPair::new(Compound::Medium, Compound::Medium),
    ];
}

impl std::fmt::Display for CompoundPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.first, self.second)
    }
}

/// Every (pair, pit lap) point in evaluation order.
pub fn one_stop_grid(pairs: &[CompoundPair], window: PitWindow) -> Vec<(CompoundPair, u32)> {
    let mut out = Vec::with_capacity(pairs.len() * window.lap_count());
    for &pair in pairs {
        for pit_lap in window.laps() {
            out.push((pair, pit_lap));
        }
    }
    out
}
