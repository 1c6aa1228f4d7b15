//! Shared workflows used by the CLI handlers.
//!
//! Keeping these here keeps `app.rs` focused on dispatch and printing:
//! config resolution -> strategy construction -> estimation.

use crate::cli::RaceArgs;
use crate::domain::{Compound, RaceParams, Strategy, TireModels};
use crate::error::{AppError, SimError, StrategyError};
use crate::io::{RunConfig, read_run_config};
use crate::report::Evaluation;
use crate::sim::monte_carlo;
use crate::strategy::{one_stop, two_stop};

/// Build the run config: `--config` file (or defaults), then per-flag overrides.
pub fn resolve_run_config(args: &RaceArgs) -> Result<RunConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => read_run_config(path)?,
        None => RunConfig::default(),
    };
    apply_overrides(&mut config.race, args);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(race: &mut RaceParams, args: &RaceArgs) {
    if let Some(track) = &args.track {
        race.track = track.clone();
    }
    if let Some(v) = args.laps {
        race.laps = v;
    }
    if let Some(v) = args.base_lap_time {
        race.base_lap_time = v;
    }
    if let Some(v) = args.pit_loss {
        race.pit_loss = v;
    }
    if let Some(v) = args.pit_sigma {
        race.pit_sigma = v;
    }
    if let Some(v) = args.fuel_effect {
        race.fuel_effect = v;
    }
    if let Some(v) = args.noise_sigma {
        race.noise_sigma = v;
    }
}

/// The reference comparison set: two one-stops and a two-stop.
pub fn reference_strategies(params: &RaceParams) -> Result<Vec<Strategy>, StrategyError> {
    Ok(vec![
        one_stop(params, 18, Compound::Soft, Compound::Medium)?,
        one_stop(params, 24, Compound::Medium, Compound::Hard)?,
        two_stop(params, 14, 36, Compound::Soft, Compound::Medium, Compound::Medium)?,
    ])
}

/// Estimate every strategy with the same trial count and seed.
pub fn compare_strategies(
    params: &RaceParams,
    tires: &TireModels,
    strategies: &[Strategy],
    trials: usize,
    seed: u64,
) -> Result<Vec<Evaluation>, SimError> {
    strategies
        .iter()
        .map(|s| -> Result<Evaluation, SimError> {
            let result = monte_carlo(params, s, trials, seed, tires)?;
            Ok(Evaluation {
                name: s.name.clone(),
                result,
            })
        })
        .collect()
}
