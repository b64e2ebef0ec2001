//! Trip-catalog generation.
//!
//! The catalog is the immutable set of candidate trips for the planning
//! week. It is generated once per run, owned as an arena of [`Trip`]
//! records, and shared read-only by the whole search; chromosomes address
//! trips by positional index into it.

use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::models::Trip;

/// The immutable weekly trip catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripCatalog {
    trips: Vec<Trip>,
}

impl TripCatalog {
    /// Generates the candidate trips for the whole horizon.
    ///
    /// Each day is filled back-to-back from the start of the working
    /// window: a duration is drawn uniformly from the configured inclusive
    /// range and a trip is appended if the draw still fits before the end
    /// of the window; the first draw that does not fit ends the day, and
    /// the leftover slack is simply unused. Ids are sequential from 1 and
    /// unique across the whole week.
    ///
    /// Deterministic for a fixed random stream; trip count and durations
    /// vary between streams.
    pub fn generate<R: Rng>(config: &CatalogConfig, rng: &mut R) -> Self {
        let mut trips = Vec::new();
        let mut id = 1;
        for day in 0..config.day_count {
            let mut cursor = config.window_start_min;
            loop {
                let duration = rng.random_range(config.min_trip_min..=config.max_trip_min);
                if cursor + duration > config.window_end_min {
                    break;
                }
                trips.push(Trip {
                    id,
                    day,
                    start_min: cursor,
                    end_min: cursor + duration,
                    duration,
                });
                id += 1;
                cursor += duration;
            }
        }
        Self { trips }
    }

    /// Builds a catalog from pre-made trips (mainly for tests).
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    #[inline]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

impl Index<usize> for TripCatalog {
    type Output = Trip;

    fn index(&self, index: usize) -> &Trip {
        &self.trips[index]
    }
}
