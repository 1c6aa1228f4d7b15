//! Stint coverage validation.
//!
//! A valid strategy covers laps `1..=laps` exactly once:
//! 1. at least one stint
//! 2. the first stint starts at lap 1
//! 3. each stint ends at or after its start lap
//! 4. each stint starts one lap after the previous one ends
//! 5. the last stint ends on the final lap
//!
//! Stints are scanned in order and the first violation is reported.

use crate::domain::{RaceParams, Strategy};
use crate::error::StrategyError;

pub fn validate_strategy(params: &RaceParams, strategy: &Strategy) -> Result<(), StrategyError> {
    if strategy.stints.is_empty() {
        return Err(StrategyError::Empty);
    }

    // One past the last covered lap; u64 so a stint ending on u32::MAX still fits.
    let mut expected: u64 = 1;
    for (index, stint) in strategy.stints.iter().enumerate() {
        if u64::from(stint.start_lap) != expected {
            let expected_lap = u32::try_from(expected).unwrap_or(u32::MAX);
            return Err(if index == 0 {
                StrategyError::FirstStintStart {
                    actual: stint.start_lap,
                }
            } else if u64::from(stint.start_lap) > expected {
                StrategyError::Gap {
                    index,
                    expected: expected_lap,
                    actual: stint.start_lap,
                }
            } else {
                StrategyError::Overlap {
                    index,
                    expected: expected_lap,
                    actual: stint.start_lap,
                }
            });
        }
        if stint.end_lap < stint.start_lap {
            return Err(StrategyError::EndBeforeStart {
                index,
                start_lap: stint.start_lap,
                end_lap: stint.end_lap,
            });
        }
        expected = u64::from(stint.end_lap) + 1;
    }

    let last = strategy.stints.len() - 1;
    let covered_to = u32::try_from(expected - 1).unwrap_or(u32::MAX);
    if covered_to != params.laps {
        return Err(StrategyError::IncompleteCoverage {
            index: last,
            expected: params.laps,
            actual: covered_to,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Compound, Stint};

    fn params(laps: u32) -> RaceParams {
        RaceParams {
            laps,
            ..RaceParams::default()
        }
    }

    fn strategy(stints: Vec<Stint>) -> Strategy {
        Strategy::new("test", stints)
    }

    #[test]
    fn accepts_exact_cover() {
        let s = strategy(vec![
            Stint::new(Compound::Soft, 1, 20),
            Stint::new(Compound::Hard, 21, 52),
        ]);
        assert_eq!(validate_strategy(&params(52), &s), Ok(()));
        assert_eq!(s.total_laps(), 52);
    }

    #[test]
    fn accepts_single_lap_stints() {
        let s = strategy(vec![
            Stint::new(Compound::Soft, 1, 1),
            Stint::new(Compound::Medium, 2, 2),
            Stint::new(Compound::Hard, 3, 3),
        ]);
        assert!(validate_strategy(&params(3), &s).is_ok());
    }

    #[test]
    fn accepts_race_ending_on_last_representable_lap() {
        let s = strategy(vec![
            Stint::new(Compound::Soft, 1, 10),
            Stint::new(Compound::Hard, 11, u32::MAX),
        ]);
        assert_eq!(validate_strategy(&params(u32::MAX), &s), Ok(()));
        assert_eq!(s.total_laps(), u64::from(u32::MAX));

        let overrun = strategy(vec![
            Stint::new(Compound::Soft, 1, u32::MAX),
            Stint::new(Compound::Hard, u32::MAX, u32::MAX),
        ]);
        assert!(matches!(
            validate_strategy(&params(u32::MAX), &overrun),
            Err(StrategyError::Overlap { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            validate_strategy(&params(52), &strategy(vec![])),
            Err(StrategyError::Empty)
        );
    }

    #[test]
    fn rejects_late_first_stint() {
        let s = strategy(vec![Stint::new(Compound::Soft, 2, 52)]);
        assert_eq!(
            validate_strategy(&params(52), &s),
            Err(StrategyError::FirstStintStart { actual: 2 })
        );
    }

    #[test]
    fn rejects_gap_and_overlap() {
        let gap = strategy(vec![
            Stint::new(Compound::Soft, 1, 20),
            Stint::new(Compound::Hard, 22, 52),
        ]);
        assert_eq!(
            validate_strategy(&params(52), &gap),
            Err(StrategyError::Gap {
                index: 1,
                expected: 21,
                actual: 22
            })
        );

        let overlap = strategy(vec![
            Stint::new(Compound::Soft, 1, 20),
            Stint::new(Compound::Hard, 20, 52),
        ]);
        assert_eq!(
            validate_strategy(&params(52), &overlap),
            Err(StrategyError::Overlap {
                index: 1,
                expected: 21,
                actual: 20
            })
        );
    }

    #[test]
    fn rejects_reversed_stint() {
        let s = strategy(vec![
            Stint::new(Compound::Soft, 1, 30),
            Stint::new(Compound::Hard, 31, 29),
        ]);
        let err = validate_strategy(&params(52), &s).unwrap_err();
        assert_eq!(
            err,
            StrategyError::EndBeforeStart {
                index: 1,
                start_lap: 31,
                end_lap: 29
            }
        );
        assert_eq!(err.stint_index(), Some(1));
    }

    #[test]
    fn rejects_short_and_long_coverage() {
        let short = strategy(vec![Stint::new(Compound::Medium, 1, 50)]);
        assert_eq!(
            validate_strategy(&params(52), &short),
            Err(StrategyError::IncompleteCoverage {
                index: 0,
                expected: 52,
                actual: 50
            })
        );

        let long = strategy(vec![
            Stint::new(Compound::Medium, 1, 30),
            Stint::new(Compound::Hard, 31, 53),
        ]);
        assert!(matches!(
            validate_strategy(&params(52), &long),
            Err(StrategyError::IncompleteCoverage { index: 1, .. })
        ));
    }

    #[test]
    fn first_violation_wins() {
        // Gap at stint 1 and reversed stint 2: the gap is reported.
        let s = strategy(vec![
            Stint::new(Compound::Soft, 1, 10),
            Stint::new(Compound::Medium, 12, 20),
            Stint::new(Compound::Hard, 21, 19),
        ]);
        assert!(matches!(
            validate_strategy(&params(52), &s),
            Err(StrategyError::Gap { index: 1, .. })
        ));
    }
}
