//! Driver labor rules.
//!
//! Assigned trips are grouped per driver and per day, sorted by start
//! time; penalties accumulate from per-day totals and the gaps between
//! consecutive trips (`next.start - prev.end`).
//!
//! Class A drivers owe a 9 h daily limit and a lunch break of at least
//! 60 min once 4 h of work have accumulated. Class B drivers owe a 12 h
//! daily limit, a short break after every 2 h block (with at most two
//! consecutive short breaks before a long one is due), and two full days
//! of rest after every worked day — the rest rule is evaluated
//! independently for each worked day against `d+1` and `d+2`, so a run of
//! three consecutive days is penalized more than once.

use std::collections::BTreeMap;

use crate::config::PenaltyWeights;
use crate::models::{DriverClass, DriverId, Schedule, Trip};

/// Class A daily total above which overtime is charged.
const CLASS_A_DAY_LIMIT_MIN: u32 = 9 * 60;
/// Class A accumulated work after which a lunch gap is owed.
const CLASS_A_LUNCH_AFTER_MIN: u32 = 4 * 60;
/// Minimum gap counting as a lunch break.
const LUNCH_GAP_MIN: u32 = 60;
/// Class B daily total above which overtime is charged.
const CLASS_B_DAY_LIMIT_MIN: u32 = 12 * 60;
/// Class B work block after which a break is owed.
const CLASS_B_BLOCK_MIN: u32 = 2 * 60;
/// Minimum gap counting as a short break.
const SHORT_BREAK_MIN: u32 = 15;
/// Gap length from which a break counts as long and resets the streak.
const LONG_BREAK_MIN: u32 = 60;
/// Consecutive short breaks allowed before a long one is due.
const MAX_SHORT_BREAK_STREAK: u32 = 2;

/// Total labor-rule penalty across all drivers in the schedule.
pub fn driver_penalty(schedule: &Schedule, weights: &PenaltyWeights) -> f64 {
    let mut by_driver: BTreeMap<DriverId, Vec<&Trip>> = BTreeMap::new();
    for (trip, crew) in schedule.assigned() {
        by_driver.entry(crew.driver).or_default().push(trip);
    }

    let mut penalty = 0.0;
    for (driver, mut trips) in by_driver {
        trips.sort_by_key(|trip| (trip.day, trip.start_min));
        let mut by_day: BTreeMap<u32, Vec<&Trip>> = BTreeMap::new();
        for trip in trips {
            by_day.entry(trip.day).or_default().push(trip);
        }

        if driver.class == DriverClass::B {
            penalty += rest_penalty(&by_day, weights);
        }

        for day_trips in by_day.values() {
            penalty += match driver.class {
                DriverClass::A => class_a_day_penalty(day_trips, weights),
                DriverClass::B => class_b_day_penalty(day_trips, weights),
            };
        }
    }
    penalty
}

/// Gap before the next trip of the same day, saturating at zero.
#[inline]
fn gap_after(pair: &[&Trip]) -> u32 {
    pair[1].start_min.saturating_sub(pair[0].end_min)
}

fn class_a_day_penalty(day_trips: &[&Trip], weights: &PenaltyWeights) -> f64 {
    let total: u32 = day_trips.iter().map(|trip| trip.duration).sum();
    let mut penalty = 0.0;

    if total > CLASS_A_DAY_LIMIT_MIN {
        penalty += weights.overtime_a;
    }

    if total > CLASS_A_LUNCH_AFTER_MIN {
        // A lunch is found at the first point where cumulative work has
        // reached 4 h and the following gap is long enough.
        let mut worked = 0;
        let mut had_lunch = false;
        for pair in day_trips.windows(2) {
            worked += pair[0].duration;
            if worked >= CLASS_A_LUNCH_AFTER_MIN && gap_after(pair) >= LUNCH_GAP_MIN {
                had_lunch = true;
                break;
            }
        }
        if !had_lunch {
            penalty += weights.no_lunch_a;
        }
    }
    penalty
}

fn class_b_day_penalty(day_trips: &[&Trip], weights: &PenaltyWeights) -> f64 {
    let total: u32 = day_trips.iter().map(|trip| trip.duration).sum();
    let mut penalty = 0.0;

    if total > CLASS_B_DAY_LIMIT_MIN {
        penalty += weights.overtime_b;
    }

    // Accumulate work up to each gap; every time the accumulator reaches a
    // full block the following gap is judged and the accumulator resets.
    let mut block = 0;
    let mut short_streak = 0;
    for pair in day_trips.windows(2) {
        block += pair[0].duration;
        if block >= CLASS_B_BLOCK_MIN {
            let gap = gap_after(pair);
            if gap < SHORT_BREAK_MIN {
                penalty += weights.short_break_b;
            } else if gap < LONG_BREAK_MIN {
                short_streak += 1;
                if short_streak > MAX_SHORT_BREAK_STREAK {
                    penalty += weights.long_break_b;
                }
            } else {
                short_streak = 0;
            }
            block = 0;
        }
    }
    // The last trip has no following gap to judge; if it leaves the day
    // with an unresolved full block, that counts as one more missed break.
    if let Some(last) = day_trips.last() {
        block += last.duration;
        if block >= CLASS_B_BLOCK_MIN {
            penalty += weights.short_break_b;
        }
    }
    penalty
}

/// Rest rule for class B: each worked day `d` is charged once if the same
/// driver also works `d + 1` or `d + 2`.
fn rest_penalty(by_day: &BTreeMap<u32, Vec<&Trip>>, weights: &PenaltyWeights) -> f64 {
    let days: Vec<u32> = by_day.keys().copied().collect();
    days.iter()
        .filter(|&&day| by_day.contains_key(&(day + 1)) || by_day.contains_key(&(day + 2)))
        .count() as f64
        * weights.no_two_day_rest_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusId, Crew, Gene, ScheduledTrip};

    fn trip(id: u32, day: u32, start_min: u32, duration: u32) -> Trip {
        Trip {
            id,
            day,
            start_min,
            end_min: start_min + duration,
            duration,
        }
    }

    fn one_driver_schedule(trips: &[Trip], class: DriverClass) -> Schedule<'_> {
        Schedule::new(
            trips
                .iter()
                .map(|trip| ScheduledTrip {
                    trip,
                    gene: Gene::Assigned(Crew {
                        driver: DriverId::new(class, 1),
                        bus: BusId(1),
                    }),
                })
                .collect(),
        )
    }

    fn weights() -> PenaltyWeights {
        PenaltyWeights::default()
    }

    #[test]
    fn test_class_a_overtime_and_missing_lunch() {
        // Ten back-to-back hour trips: 600 min total, no gaps at all.
        let trips: Vec<Trip> = (0..10).map(|i| trip(i + 1, 0, 360 + i * 60, 60)).collect();
        let schedule = one_driver_schedule(&trips, DriverClass::A);
        let penalty = driver_penalty(&schedule, &weights());
        assert_eq!(penalty, weights().overtime_a + weights().no_lunch_a);
    }

    #[test]
    fn test_class_a_lunch_found() {
        // 4 h of work, then a 60 min gap, then one more trip: lunch taken,
        // total stays under the overtime limit.
        let trips = vec![
            trip(1, 0, 360, 120),
            trip(2, 0, 480, 120),
            trip(3, 0, 660, 60),
        ];
        let schedule = one_driver_schedule(&trips, DriverClass::A);
        assert_eq!(driver_penalty(&schedule, &weights()), 0.0);
    }

    #[test]
    fn test_class_a_gap_before_four_hours_does_not_count() {
        // The only long gap falls before 4 h of accumulated work, so the
        // lunch requirement is still unmet.
        let trips = vec![
            trip(1, 0, 360, 120),
            trip(2, 0, 540, 120),
            trip(3, 0, 660, 60),
        ];
        let schedule = one_driver_schedule(&trips, DriverClass::A);
        assert_eq!(driver_penalty(&schedule, &weights()), weights().no_lunch_a);
    }

    #[test]
    fn test_class_a_short_day_needs_no_lunch() {
        let trips = vec![trip(1, 0, 360, 120), trip(2, 0, 480, 100)];
        let schedule = one_driver_schedule(&trips, DriverClass::A);
        assert_eq!(driver_penalty(&schedule, &weights()), 0.0);
    }

    #[test]
    fn test_class_b_missing_short_break() {
        // Two hours of work, then a 10 min gap: too short.
        let trips = vec![trip(1, 0, 360, 120), trip(2, 0, 490, 30)];
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(driver_penalty(&schedule, &weights()), weights().short_break_b);
    }

    #[test]
    fn test_class_b_short_break_ok() {
        // A 20 min gap after the 2 h block qualifies as a short break.
        let trips = vec![trip(1, 0, 360, 120), trip(2, 0, 500, 30)];
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(driver_penalty(&schedule, &weights()), 0.0);
    }

    #[test]
    fn test_class_b_three_consecutive_short_breaks() {
        // Three 2 h blocks each followed by a 20 min short break, then a
        // final 2 h block with a short break: streak hits 3 and 4.
        let mut trips = Vec::new();
        let mut start = 0;
        for i in 0..5 {
            trips.push(trip(i + 1, 0, start, 120));
            start += 120 + 20;
        }
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        // Four judged gaps: streak 1, 2, 3, 4 — two beyond the allowance.
        // The trailing 120 min block is unresolved, and 600 min total
        // stays under the 12 h limit.
        assert_eq!(
            driver_penalty(&schedule, &weights()),
            2.0 * weights().long_break_b + weights().short_break_b
        );
    }

    #[test]
    fn test_class_b_long_break_resets_streak() {
        // Short, short, long, short, short: the long break resets the
        // streak, so it never exceeds two.
        let mut trips = Vec::new();
        let mut start = 0;
        let gaps = [20, 20, 60, 20, 20];
        for (i, gap) in gaps.iter().enumerate() {
            trips.push(trip(i as u32 + 1, 0, start, 120));
            start += 120 + gap;
        }
        trips.push(trip(6, 0, start, 30));
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(driver_penalty(&schedule, &weights()), 0.0);
    }

    #[test]
    fn test_class_b_gap_below_short_minimum() {
        // One short break taken, then a second block followed by a 1 min
        // gap: too short, charged once; the 30 min tail is no full block.
        let trips = vec![trip(1, 0, 360, 120), trip(2, 0, 500, 120), trip(3, 0, 621, 30)];
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(driver_penalty(&schedule, &weights()), weights().short_break_b);
    }

    #[test]
    fn test_class_b_trailing_block_charged_once() {
        // A short break after the first block, then a full block that ends
        // the day with no gap left to judge.
        let trips = vec![trip(1, 0, 360, 120), trip(2, 0, 500, 120)];
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(driver_penalty(&schedule, &weights()), weights().short_break_b);
    }

    #[test]
    fn test_class_b_single_long_trip_ends_unresolved() {
        // A 5 h trip with no break anywhere leaves one unresolved block.
        let trips = vec![trip(1, 0, 360, 300)];
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(driver_penalty(&schedule, &weights()), weights().short_break_b);
    }

    #[test]
    fn test_class_b_overtime() {
        let trips: Vec<Trip> = (0..11)
            .map(|i| trip(i + 1, 0, 360 + i * 130, 70))
            .collect();
        // 770 min total, every gap is 60 min (long breaks throughout).
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(driver_penalty(&schedule, &weights()), weights().overtime_b);
    }

    #[test]
    fn test_rest_rule_three_day_run_counts_twice() {
        let trips = vec![trip(1, 0, 360, 60), trip(2, 1, 360, 60), trip(3, 2, 360, 60)];
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        // Day 0 sees day 1; day 1 sees day 2; day 2 sees nothing.
        assert_eq!(
            driver_penalty(&schedule, &weights()),
            2.0 * weights().no_two_day_rest_b
        );
    }

    #[test]
    fn test_rest_rule_day_after_next_still_counts() {
        let trips = vec![trip(1, 0, 360, 60), trip(2, 2, 360, 60)];
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(
            driver_penalty(&schedule, &weights()),
            weights().no_two_day_rest_b
        );
    }

    #[test]
    fn test_rest_rule_three_day_spacing_is_clean() {
        let trips = vec![trip(1, 0, 360, 60), trip(2, 3, 360, 60), trip(3, 6, 360, 60)];
        let schedule = one_driver_schedule(&trips, DriverClass::B);
        assert_eq!(driver_penalty(&schedule, &weights()), 0.0);
    }

    #[test]
    fn test_rest_rule_does_not_apply_to_class_a() {
        let trips = vec![trip(1, 0, 360, 60), trip(2, 1, 360, 60), trip(3, 2, 360, 60)];
        let schedule = one_driver_schedule(&trips, DriverClass::A);
        assert_eq!(driver_penalty(&schedule, &weights()), 0.0);
    }

    #[test]
    fn test_drivers_are_independent() {
        // Same trips split across two drivers: neither accumulates enough
        // for any violation.
        let trips: Vec<Trip> = (0..4).map(|i| trip(i + 1, 0, 360 + i * 200, 60)).collect();
        let schedule = Schedule::new(
            trips
                .iter()
                .enumerate()
                .map(|(i, trip)| ScheduledTrip {
                    trip,
                    gene: Gene::Assigned(Crew {
                        driver: DriverId::new(DriverClass::A, 1 + (i as u32 % 2)),
                        bus: BusId(1),
                    }),
                })
                .collect(),
        );
        assert_eq!(driver_penalty(&schedule, &weights()), 0.0);
    }
}
