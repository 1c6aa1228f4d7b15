//! Monte Carlo estimation of a strategy's race-time distribution.
//!
//! Trial seeds are drawn sequentially from one generator seeded with the
//! top-level seed, so trial `i` always gets the same sub-seed. Trials then run in
//! parallel; totals are collected in trial order and reduced sequentially, which
//! keeps results bit-for-bit identical regardless of scheduling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::domain::{McResult, RaceParams, Strategy, TireModels};
use crate::error::SimError;
use crate::sim::race::run_race;
use crate::strategy::validate_strategy;

/// Upper bound (inclusive) of per-trial sub-seeds.
pub const SUB_SEED_MAX: u64 = 1_000_000_000;

/// Per-trial seeds derived from `seed`.
pub fn trial_seeds(seed: u64, trials: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..trials).map(|_| rng.gen_range(0..=SUB_SEED_MAX)).collect()
}

/// Estimate (mean, sample std) of total race time over `trials` simulated races.
pub fn monte_carlo(
    params: &RaceParams,
    strategy: &Strategy,
    trials: usize,
    seed: u64,
    tires: &TireModels,
) -> Result<McResult, SimError> {
    if trials == 0 {
        return Err(SimError::ZeroTrials);
    }
    validate_strategy(params, strategy)?;

    let seeds = trial_seeds(seed, trials);
    let totals: Vec<f64> = seeds
        .par_iter()
        .map(|&trial_seed| {
            let mut rng = StdRng::seed_from_u64(trial_seed);
            run_race(params, strategy, tires, &mut rng)
        })
        .collect();

    let result = summarize(&totals).ok_or(SimError::ZeroTrials)?;
    debug!(
        strategy = %strategy.name,
        trials,
        seed,
        mean = result.mean,
        std = result.std,
        "monte carlo estimate"
    );
    Ok(result)
}

/// Mean and sample standard deviation (÷ n-1; exactly 0 for a single sample).
///
/// Returns `None` for an empty slice.
pub fn summarize(samples: &[f64]) -> Option<McResult> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    if samples.len() == 1 {
        return Some(McResult { mean, std: 0.0 });
    }
    let ss: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
    let std = (ss / (n - 1.0)).sqrt();
    Some(McResult { mean, std })
}
