//! Single-race simulation.
//!
//! All randomness for one race comes from one seeded stream, consumed in a fixed
//! order: every pit-stop loss first, then each lap of each stint in strategy
//! order. A given seed therefore reproduces the same total exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::domain::{RaceParams, Strategy, TireModels};
use crate::error::StrategyError;
use crate::sim::lap::lap_time;
use crate::strategy::validate_strategy;

/// Simulate one race and return the total time in seconds.
///
/// The strategy is re-validated first. `seed = None` draws a fresh seed from OS
/// entropy (non-reproducible).
pub fn simulate_race(
    params: &RaceParams,
    strategy: &Strategy,
    seed: Option<u64>,
    tires: &TireModels,
) -> Result<f64, StrategyError> {
    validate_strategy(params, strategy)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(run_race(params, strategy, tires, &mut rng))
}

/// One pit-stop time loss, floored at 0.
pub fn pit_loss_draw<R: Rng + ?Sized>(params: &RaceParams, rng: &mut R) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    let loss = params.pit_loss + params.pit_sigma * z;
    if loss < 0.0 { 0.0 } else { loss }
}

/// Race total for an already-validated strategy.
pub(crate) fn run_race<R: Rng + ?Sized>(
    params: &RaceParams,
    strategy: &Strategy,
    tires: &TireModels,
    rng: &mut R,
) -> f64 {
    let mut total = 0.0;

    for _ in 0..strategy.pit_stops() {
        total += pit_loss_draw(params, rng);
    }

    for stint in &strategy.stints {
        let tire = tires.get(stint.compound);
        for lap in stint.start_lap..=stint.end_lap {
            let age = stint.start_age.saturating_add(lap - stint.start_lap);
            total += lap_time(params, tire, lap, age, rng);
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Compound, Stint};
    use crate::strategy::{one_stop, two_stop};

    fn params() -> RaceParams {
        RaceParams {
            noise_sigma: 0.35,
            ..RaceParams::default()
        }
    }

    #[test]
    fn seeded_race_is_bit_identical() {
        let p = params();
        let s = one_stop(&p, 26, Compound::Soft, Compound::Medium).unwrap();
        let tires = TireModels::default();
        let a = simulate_race(&p, &s, Some(1234), &tires).unwrap();
        let b = simulate_race(&p, &s, Some(1234), &tires).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());

        let c = simulate_race(&p, &s, Some(1235), &tires).unwrap();
        assert_ne!(a.to_bits(), c.to_bits());
    }

    #[test]
    fn noiseless_race_matches_closed_form() {
        let p = RaceParams {
            laps: 4,
            base_lap_time: 100.0,
            pit_loss: 20.0,
            fuel_effect: 0.5,
            noise_sigma: 0.0,
            pit_sigma: 0.0,
            ..RaceParams::default()
        };
        let tires = TireModels::default();
        let s = one_stop(&p, 2, Compound::Hard, Compound::Soft).unwrap();
        let total = simulate_race(&p, &s, Some(0), &tires).unwrap();

        let hard = tires.hard;
        let soft = tires.soft;
        let expected = 20.0
            + (100.0 + hard.degradation(0))
            + (100.0 - 0.5 + hard.degradation(1))
            + (100.0 - 1.0 + soft.degradation(0))
            + (100.0 - 1.5 + soft.degradation(1));
        assert!((total - expected).abs() < 1e-9, "got {total}, expected {expected}");
    }

    #[test]
    fn used_tires_start_at_their_age() {
        let p = RaceParams {
            laps: 3,
            noise_sigma: 0.0,
            ..RaceParams::default()
        };
        let tires = TireModels::default();
        let fresh = Strategy::new("fresh", vec![Stint::new(Compound::Soft, 1, 3)]);
        let used = Strategy::new(
            "used",
            vec![Stint {
                start_age: 10,
                ..Stint::new(Compound::Soft, 1, 3)
            }],
        );
        let t_fresh = simulate_race(&p, &fresh, Some(5), &tires).unwrap();
        let t_used = simulate_race(&p, &used, Some(5), &tires).unwrap();
        assert!(t_used > t_fresh);
    }

    #[test]
    fn oldest_tire_age_does_not_overflow() {
        let p = RaceParams {
            laps: 2,
            noise_sigma: 0.0,
            ..RaceParams::default()
        };
        let worn = Strategy::new(
            "worn",
            vec![Stint {
                start_age: u32::MAX,
                ..Stint::new(Compound::Hard, 1, 2)
            }],
        );
        let tires = TireModels::default();
        let total = simulate_race(&p, &worn, Some(9), &tires).unwrap();

        // Age saturates, so both laps carry the same degradation.
        let deg = tires.hard.degradation(u32::MAX);
        let expected = 2.0 * p.base_lap_time - p.fuel_effect + 2.0 * deg;
        assert!(total.is_finite());
        assert!((total - expected).abs() < 1e-6 * expected.abs(), "got {total}, expected {expected}");
    }

    #[test]
    fn custom_tire_table_is_used() {
        let p = RaceParams {
            noise_sigma: 0.0,
            pit_sigma: 0.0,
            ..RaceParams::default()
        };
        let s = one_stop(&p, 20, Compound::Medium, Compound::Hard).unwrap();
        let default_total = simulate_race(&p, &s, Some(3), &TireModels::default()).unwrap();

        let mut slow = TireModels::default();
        slow.hard.base += 1.0;
        let slow_total = simulate_race(&p, &s, Some(3), &slow).unwrap();
        // 32 laps on hards, each one second slower.
        assert!((slow_total - default_total - 32.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_strategy_is_rejected_before_simulation() {
        let p = params();
        let broken = Strategy::new(
            "broken",
            vec![Stint::new(Compound::Soft, 1, 20), Stint::new(Compound::Hard, 22, 52)],
        );
        let err = simulate_race(&p, &broken, Some(1), &TireModels::default()).unwrap_err();
        assert_eq!(err.stint_index(), Some(1));
    }

    #[test]
    fn pit_loss_never_negative() {
        let p = RaceParams {
            pit_loss: 0.5,
            pit_sigma: 2.0,
            ..RaceParams::default()
        };
        let mut rng = StdRng::seed_from_u64(77);
        let draws: Vec<f64> = (0..20_000).map(|_| pit_loss_draw(&p, &mut rng)).collect();
        let min = draws.iter().copied().fold(f64::INFINITY, f64::min);
        assert!(min >= 0.0);
        assert!(draws.iter().any(|&d| d == 0.0), "expected some clamped draws");
    }

    #[test]
    fn more_stops_add_pit_loss() {
        let p = RaceParams {
            noise_sigma: 0.0,
            pit_sigma: 0.0,
            ..RaceParams::default()
        };
        let tires = TireModels::default();
        let one = one_stop(&p, 26, Compound::Medium, Compound::Medium).unwrap();
        let two = two_stop(&p, 26, 40, Compound::Medium, Compound::Medium, Compound::Medium).unwrap();
        let t1 = simulate_race(&p, &one, None, &tires).unwrap();
        let t2 = simulate_race(&p, &two, None, &tires).unwrap();
        // Extra stop costs pit_loss but resets the tire on laps 41..=52.
        assert!(t2 > t1);
        assert!(t2 - t1 < p.pit_loss);
    }
}
