//! Lap-time model.
//!
//! `time = base_lap_time - fuel_effect*(lap-1) + degradation(age) + noise`
//!
//! The model is a deliberately simple placeholder: no clipping is applied to the
//! resulting lap time.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::domain::{RaceParams, TireModel};

/// Fuel burn-off term for a 1-indexed lap (non-positive for `fuel_effect >= 0`).
pub fn fuel_term(params: &RaceParams, lap: u32) -> f64 {
    -params.fuel_effect * (lap.saturating_sub(1)) as f64
}

/// Duration of one lap. Consumes exactly one standard-normal draw from `rng`.
pub fn lap_time<R: Rng + ?Sized>(
    params: &RaceParams,
    tire: &TireModel,
    lap: u32,
    tire_age: u32,
    rng: &mut R,
) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    let noise = params.noise_sigma * z;
    params.base_lap_time + fuel_term(params, lap) + tire.degradation(tire_age) + noise
}
