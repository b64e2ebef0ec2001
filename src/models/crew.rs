//! Driver/bus identity and per-trip assignment.
//!
//! A [`Gene`] is the assignment for exactly one trip: either empty (the
//! trip is unserved) or a complete [`Crew`]. Partial assignments — a driver
//! without a bus or vice versa — are unrepresentable; any attempt to build
//! one through [`Gene::from_parts`] collapses to [`Gene::Empty`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Labor-rule class of a driver.
///
/// Class A and class B drivers are subject to different daily limits and
/// break rules (see [`constraints::driver_rules`](crate::constraints::driver_rules)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DriverClass {
    A,
    B,
}

/// Driver identity: a class plus a numeric label.
///
/// Not a registered entity — any pair is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DriverId {
    pub class: DriverClass,
    pub number: u32,
}

impl DriverId {
    pub fn new(class: DriverClass, number: u32) -> Self {
        Self { class, number }
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.class {
            DriverClass::A => 'A',
            DriverClass::B => 'B',
        };
        write!(f, "{tag}{}", self.number)
    }
}

/// Bus identity.
///
/// Unbounded in principle; ids above the configured base fleet size count
/// as "extra" buses in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BusId(pub u32);

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete driver + bus assignment for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crew {
    pub driver: DriverId,
    pub bus: BusId,
}

/// Assignment state of one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gene {
    /// Trip is not served.
    Empty,
    /// Trip is served by a complete crew.
    Assigned(Crew),
}

impl Gene {
    /// Builds a gene from independently drawn parts.
    ///
    /// A missing driver or a missing bus collapses the whole gene to
    /// [`Gene::Empty`]; a partial pair never persists.
    pub fn from_parts(driver: Option<DriverId>, bus: Option<BusId>) -> Self {
        match (driver, bus) {
            (Some(driver), Some(bus)) => Gene::Assigned(Crew { driver, bus }),
            _ => Gene::Empty,
        }
    }

    /// The crew serving this trip, if any.
    #[inline]
    pub fn crew(&self) -> Option<Crew> {
        match self {
            Gene::Assigned(crew) => Some(*crew),
            Gene::Empty => None,
        }
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        matches!(self, Gene::Assigned(_))
    }
}
