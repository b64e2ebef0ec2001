//! Schedule rendering.
//!
//! Turns a decoded schedule into per-day trip listings for human
//! consumption. Pure formatting — no I/O, no scoring; the search core
//! never depends on this module.

use std::fmt::Write;

use crate::models::Schedule;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Formats a minute offset as `HH:MM` on the 24 h clock.
///
/// Offsets past midnight wrap: 1620 renders as `03:00`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", (minute / 60) % 24, minute % 60)
}

fn day_label(day: u32) -> String {
    DAY_NAMES
        .get(day as usize)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Day {}", day + 1))
}

/// Renders the served trips of a schedule, grouped per day and ordered by
/// start time.
///
/// Each line lists trip id, start/end clock time, duration, driver label,
/// and bus id; unserved trips and empty days are omitted.
pub fn render(schedule: &Schedule) -> String {
    let mut assigned: Vec<_> = schedule.assigned().collect();
    assigned.sort_by_key(|(trip, _)| (trip.day, trip.start_min));

    let mut out = String::new();
    let mut current_day = None;
    for (trip, crew) in assigned {
        if current_day != Some(trip.day) {
            if current_day.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}:", day_label(trip.day));
            current_day = Some(trip.day);
        }
        let _ = writeln!(
            out,
            "  Trip {}: {}-{} ({} min), driver {}, bus {}",
            trip.id,
            format_clock(trip.start_min),
            format_clock(trip.end_min),
            trip.duration,
            crew.driver,
            crew.bus,
        );
    }
    out
}
