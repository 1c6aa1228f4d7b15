//! One-stop and two-stop strategy builders.
//!
//! Builders never clamp pit laps. An out-of-range pit lap produces a stint
//! that fails validation, and that error is returned to the caller.

use crate::domain::{Compound, RaceParams, Stint, Strategy};
use crate::error::StrategyError;
use crate::strategy::validate::validate_strategy;

/// Two stints: `first` on laps `1..=pit_lap`, `second` on `pit_lap+1..=laps`.
pub fn one_stop(
    params: &RaceParams,
    pit_lap: u32,
    first: Compound,
    second: Compound,
) -> Result<Strategy, StrategyError> {
    let strategy = Strategy::new(
        format!("1-stop {first}->{second} @L{pit_lap}"),
        vec![
            Stint::new(first, 1, pit_lap),
            Stint::new(second, pit_lap.saturating_add(1), params.laps),
        ],
    );
    validate_strategy(params, &strategy)?;
    Ok(strategy)
}

/// Three stints split after `pit1` and `pit2`.
pub fn two_stop(
    params: &RaceParams,
    pit1: u32,
    pit2: u32,
    c1: Compound,
    c2: Compound,
    c3: Compound,
) -> Result<Strategy, StrategyError> {
    let strategy = Strategy::new(
        format!("2-stop {c1}->{c2}->{c3} @L{pit1},L{pit2}"),
        vec![
            Stint::new(c1, 1, pit1),
            Stint::new(c2, pit1.saturating_add(1), pit2),
            Stint::new(c3, pit2.saturating_add(1), params.laps),
        ],
    );
    validate_strategy(params, &strategy)?;
    Ok(strategy)
}
