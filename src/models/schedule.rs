//! Decoded schedule view.
//!
//! A [`Schedule`] pairs every catalog trip with the gene assigned to it in
//! one candidate roster. It is a derived, borrowing view — built on demand
//! by decoding and never stored independently of the chromosome and the
//! catalog it came from.

use crate::config::PeakWindow;

use super::{Crew, Gene, Trip};

/// One catalog trip together with its assignment state.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledTrip<'a> {
    pub trip: &'a Trip,
    pub gene: Gene,
}

/// A candidate roster decoded against its trip catalog.
///
/// Entry order matches catalog order; `entries()[i].trip` is catalog trip
/// `i`. All scoring metrics consider only completely assigned trips.
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    entries: Vec<ScheduledTrip<'a>>,
}

impl<'a> Schedule<'a> {
    pub(crate) fn new(entries: Vec<ScheduledTrip<'a>>) -> Self {
        Self { entries }
    }

    /// Number of catalog trips (assigned or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order.
    #[inline]
    pub fn entries(&self) -> &[ScheduledTrip<'a>] {
        &self.entries
    }

    /// Iterator over completely assigned trips only.
    pub fn assigned(&self) -> impl Iterator<Item = (&'a Trip, Crew)> + '_ {
        self.entries
            .iter()
            .filter_map(|entry| entry.gene.crew().map(|crew| (entry.trip, crew)))
    }

    /// Count of completely assigned trips.
    pub fn completed_trips(&self) -> usize {
        self.assigned().count()
    }

    /// Count of distinct drivers among assigned trips.
    pub fn unique_drivers(&self) -> usize {
        let mut drivers: Vec<_> = self.assigned().map(|(_, crew)| crew.driver).collect();
        drivers.sort_unstable();
        drivers.dedup();
        drivers.len()
    }

    /// Buses in use beyond the base fleet: `max(0, max assigned id - base)`.
    pub fn extra_buses(&self, base_fleet_size: u32) -> u32 {
        self.assigned()
            .map(|(_, crew)| crew.bus.0)
            .max()
            .map_or(0, |max_bus| max_bus.saturating_sub(base_fleet_size))
    }

    /// Count of assigned trips starting inside any peak window.
    pub fn peak_trips(&self, peaks: &[PeakWindow]) -> usize {
        self.assigned()
            .filter(|(trip, _)| peaks.iter().any(|peak| peak.contains(trip.start_min)))
            .count()
    }
}
