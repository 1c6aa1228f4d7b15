//! Shared domain types.
//!
//! These are plain immutable value records. Validity of a `Strategy` (exact,
//! contiguous lap coverage) is *not* encoded in the type: it is checked by
//! `strategy::validate_strategy`, so partial strategies can exist while building.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Tire compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Compound {
    Soft,
    Medium,
    Hard,
}

impl Compound {
    pub const ALL: [Compound; 3] = [Compound::Soft, Compound::Medium, Compound::Hard];

    /// Short display code (`S`, `M`, `H`).
    pub fn code(self) -> &'static str {
        match self {
            Compound::Soft => "S",
            Compound::Medium => "M",
            Compound::Hard => "H",
        }
    }

    /// Lowercase name, as used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Compound::Soft => "soft",
            Compound::Medium => "medium",
            Compound::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Compound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-compound degradation curve.
///
/// Lap-time penalty at tire age `a`: `base + lin*a + quad*a^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TireModel {
    pub base: f64,
    pub lin: f64,
    pub quad: f64,
}

impl TireModel {
    pub const fn new(base: f64, lin: f64, quad: f64) -> Self {
        Self { base, lin, quad }
    }

    /// Degradation penalty (seconds) for a tire that has completed `age` laps.
    pub fn degradation(&self, age: u32) -> f64 {
        let a = age as f64;
        self.base + self.lin * a + self.quad * a * a
    }

    fn validate(&self, compound: Compound) -> Result<(), SimError> {
        for (name, value) in [("base", self.base), ("lin", self.lin), ("quad", self.quad)] {
            if !value.is_finite() {
                return Err(SimError::InvalidParams(format!(
                    "tires.{}.{name} must be finite (got {value})",
                    compound.name()
                )));
            }
        }
        Ok(())
    }
}

/// One tire model per compound.
///
/// Passed explicitly to every simulation call; `TireModels::default()` is the
/// reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TireModels {
    pub soft: TireModel,
    pub medium: TireModel,
    pub hard: TireModel,
}

impl TireModels {
    pub const DEFAULT_SOFT: TireModel = TireModel::new(0.00, 0.060, 0.0020);
    pub const DEFAULT_MEDIUM: TireModel = TireModel::new(0.18, 0.045, 0.0012);
    pub const DEFAULT_HARD: TireModel = TireModel::new(0.35, 0.030, 0.0008);

    pub fn get(&self, compound: Compound) -> &TireModel {
        match compound {
            Compound::Soft => &self.soft,
            Compound::Medium => &self.medium,
            Compound::Hard => &self.hard,
        }
    }

    /// Reject non-finite coefficients; they would turn every race time into NaN.
    pub fn validate(&self) -> Result<(), SimError> {
        for compound in Compound::ALL {
            self.get(compound).validate(compound)?;
        }
        Ok(())
    }
}

impl Default for TireModels {
    fn default() -> Self {
        Self {
            soft: Self::DEFAULT_SOFT,
            medium: Self::DEFAULT_MEDIUM,
            hard: Self::DEFAULT_HARD,
        }
    }
}

/// Race configuration. All times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceParams {
    pub track: String,
    pub laps: u32,
    pub base_lap_time: f64,
    /// Mean time lost per pit stop.
    pub pit_loss: f64,
    /// Lap-time improvement per completed lap as fuel burns off.
    pub fuel_effect: f64,
    /// Lap-to-lap noise (std dev).
    pub noise_sigma: f64,
    /// Pit-stop loss noise (std dev).
    pub pit_sigma: f64,
}

impl Default for RaceParams {
    fn default() -> Self {
        Self {
            track: "Silverstone".to_string(),
            laps: 52,
            base_lap_time: 90.0,
            pit_loss: 22.0,
            fuel_effect: 0.030,
            noise_sigma: 0.20,
            pit_sigma: 0.60,
        }
    }
}

impl RaceParams {
    /// Reject parameter sets the lap-time model cannot meaningfully run.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.laps == 0 {
            return Err(SimError::InvalidParams("laps must be > 0".to_string()));
        }
        let reals = [
            ("base_lap_time", self.base_lap_time),
            ("pit_loss", self.pit_loss),
            ("fuel_effect", self.fuel_effect),
            ("noise_sigma", self.noise_sigma),
            ("pit_sigma", self.pit_sigma),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(SimError::InvalidParams(format!("{name} must be finite (got {value})")));
            }
        }
        for (name, value) in [
            ("pit_loss", self.pit_loss),
            ("noise_sigma", self.noise_sigma),
            ("pit_sigma", self.pit_sigma),
        ] {
            if value < 0.0 {
                return Err(SimError::InvalidParams(format!("{name} must be >= 0 (got {value})")));
            }
        }
        Ok(())
    }
}

/// A contiguous block of laps on one compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stint {
    pub compound: Compound,
    /// First lap of the stint (1-indexed).
    pub start_lap: u32,
    /// Last lap of the stint (inclusive).
    pub end_lap: u32,
    /// Tire age at the start of the stint (0 for a fresh set).
    pub start_age: u32,
}

impl Stint {
    /// Fresh-tire stint covering `start_lap..=end_lap`.
    pub fn new(compound: Compound, start_lap: u32, end_lap: u32) -> Self {
        Self {
            compound,
            start_lap,
            end_lap,
            start_age: 0,
        }
    }

    /// Laps covered; 0 for a reversed stint.
    pub fn lap_count(&self) -> u64 {
        if self.end_lap < self.start_lap {
            0
        } else {
            u64::from(self.end_lap - self.start_lap) + 1
        }
    }
}

/// A named, ordered sequence of stints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub name: String,
    pub stints: Vec<Stint>,
}

impl Strategy {
    pub fn new(name: impl Into<String>, stints: Vec<Stint>) -> Self {
        Self {
            name: name.into(),
            stints,
        }
    }

    pub fn pit_stops(&self) -> usize {
        self.stints.len().saturating_sub(1)
    }

    pub fn total_laps(&self) -> u64 {
        self.stints.iter().map(Stint::lap_count).sum()
    }
}

/// Monte Carlo summary of one strategy's race-time distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McResult {
    pub mean: f64,
    /// Sample standard deviation (0 when only one trial was run).
    pub std: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_codes() {
        let codes: Vec<&str> = Compound::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["S", "M", "H"]);
        assert_eq!(Compound::Medium.to_string(), "M");
    }

    #[test]
    fn default_tire_table_matches_reference() {
        let tires = TireModels::default();
        assert_eq!(*tires.get(Compound::Soft), TireModel::new(0.00, 0.060, 0.0020));
        assert_eq!(*tires.get(Compound::Medium), TireModel::new(0.18, 0.045, 0.0012));
        assert_eq!(*tires.get(Compound::Hard), TireModel::new(0.35, 0.030, 0.0008));
    }

    #[test]
    fn degradation_is_quadratic_in_age() {
        let t = TireModel::new(0.5, 0.1, 0.01);
        assert!((t.degradation(0) - 0.5).abs() < 1e-12);
        assert!((t.degradation(10) - (0.5 + 1.0 + 1.0)).abs() < 1e-12);
        assert!(t.degradation(11) > t.degradation(10));
    }

    #[test]
    fn params_validation() {
        assert!(RaceParams::default().validate().is_ok());

        let zero_laps = RaceParams {
            laps: 0,
            ..RaceParams::default()
        };
        assert!(matches!(zero_laps.validate(), Err(SimError::InvalidParams(_))));

        let negative_sigma = RaceParams {
            pit_sigma: -0.1,
            ..RaceParams::default()
        };
        assert!(negative_sigma.validate().is_err());

        let nan_base = RaceParams {
            base_lap_time: f64::NAN,
            ..RaceParams::default()
        };
        assert!(nan_base.validate().is_err());
    }

    #[test]
    fn stint_lap_count() {
        assert_eq!(Stint::new(Compound::Soft, 1, 26).lap_count(), 26);
        assert_eq!(Stint::new(Compound::Soft, 5, 4).lap_count(), 0);
        assert_eq!(Stint::new(Compound::Soft, 1, u32::MAX).lap_count(), u64::from(u32::MAX));
        assert_eq!(Stint::new(Compound::Soft, 0, u32::MAX).lap_count(), 1 << 32);

        let whole = Strategy::new(
            "whole",
            vec![Stint::new(Compound::Soft, 0, u32::MAX), Stint::new(Compound::Hard, 1, 1)],
        );
        assert_eq!(whole.total_laps(), (1 << 32) + 1);
    }

    #[test]
    fn tire_validation_rejects_non_finite_coefficients() {
        assert!(TireModels::default().validate().is_ok());

        let mut tires = TireModels::default();
        tires.hard.base = f64::NAN;
        let err = tires.validate().unwrap_err();
        assert!(matches!(&err, SimError::InvalidParams(msg) if msg.contains("tires.hard.base")));

        let mut tires = TireModels::default();
        tires.medium.quad = f64::INFINITY;
        assert!(tires.validate().is_err());
    }
}
