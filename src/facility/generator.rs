//! Demo roster generation
//!
//! Produces a plausible city-wide facility roster for trying the advisor out
//! without a connection to the statistics provider.

use crate::facility::{record::FacilityRecord, roster::FacilityRoster};
use crate::redirection::compatibility::CompatibilityTable;
use rand::{prelude::*, rngs::StdRng, RngCore, SeedableRng};
use std::fmt;
use tracing::{info, warn};

/// Default city centre (Almaty)
pub const DEFAULT_CITY_CENTER: (f64, f64) = (43.238949, 76.889709);

/// Districts used for generated facilities
const DISTRICT_NAMES: &[&str] = &[
    "Alatau",
    "Almaly",
    "Auezov",
    "Bostandyk",
    "Zhetysu",
    "Medeu",
    "Nauryzbay",
    "Turksib",
];

/// Share of generated facilities that are reported without coordinates
const MISSING_COORDINATES_RATE: f64 = 0.05;

/// Generator for demo facility rosters
pub struct RosterGenerator {
    rng: Box<dyn RngCore>,
    center: (f64, f64),
    spread_degrees: f64,
    facility_types: Vec<String>,
}

impl fmt::Debug for RosterGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterGenerator")
            .field("center", &self.center)
            .field("spread_degrees", &self.spread_degrees)
            .field("facility_types", &self.facility_types)
            .finish()
    }
}

impl Default for RosterGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterGenerator {
    /// Create a new roster generator
    pub fn new() -> Self {
        Self::with_rng(Box::new(thread_rng()))
    }

    /// Create a new roster generator with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Box::new(StdRng::seed_from_u64(seed)))
    }

    fn with_rng(rng: Box<dyn RngCore>) -> Self {
        let facility_types = CompatibilityTable::builtin()
            .facility_types()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self { rng, center: DEFAULT_CITY_CENTER, spread_degrees: 0.12, facility_types }
    }

    /// Centre facilities around another point
    pub fn with_center(mut self, latitude: f64, longitude: f64) -> Self {
        self.center = (latitude, longitude);
        self
    }

    /// Maximum coordinate offset from the centre, in degrees
    ///
    /// Non-finite values are ignored and the current spread is kept.
    pub fn with_spread(mut self, spread_degrees: f64) -> Self {
        if spread_degrees.is_finite() {
            self.spread_degrees = spread_degrees.abs();
        } else {
            warn!("Ignoring non-finite roster spread {}", spread_degrees);
        }
        self
    }

    /// Generate a roster with ids `1..=count`
    pub fn generate_roster(&mut self, count: usize) -> FacilityRoster {
        let roster =
            FacilityRoster::from_records((1..=count as u64).map(|id| self.generate_facility(id)));
        info!("Generated demo roster with {} facilities", roster.len());
        roster
    }

    /// Generate a single facility
    pub fn generate_facility(&mut self, id: u64) -> FacilityRecord {
        let facility_type = self.facility_types[self.rng.gen_range(0..self.facility_types.len())].clone();
        let district = DISTRICT_NAMES[self.rng.gen_range(0..DISTRICT_NAMES.len())];

        // Roughly a third of facilities run hot
        let occupancy_rate = if self.rng.gen_bool(0.35) {
            self.rng.gen_range(0.7..1.25)
        } else {
            self.rng.gen_range(0.2..0.7)
        };
        let beds_deployed = self.rng.gen_range(20..=600);

        let mut record = FacilityRecord::new(id, facility_type.clone(), occupancy_rate, beds_deployed)
            .with_name(format!("{} No. {}", facility_type, id))
            .with_district(district);

        if !self.rng.gen_bool(MISSING_COORDINATES_RATE) {
            let lat = self.center.0 + self.rng.gen_range(-self.spread_degrees..=self.spread_degrees);
            let lon = self.center.1 + self.rng.gen_range(-self.spread_degrees..=self.spread_degrees);
            record = record.with_coordinates(lat, lon);
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::geo::distance_between;

    #[test]
    fn test_generate_roster() {
        let mut generator = RosterGenerator::with_seed(42);
        let roster = generator.generate_roster(50);

        assert_eq!(roster.len(), 50);
        let table = CompatibilityTable::builtin();
        let known_types = table.facility_types();
        for record in roster.records() {
            assert!(known_types.contains(record.facility_type.as_str()));
            assert!(record.district_name().is_some());
            assert!(record.beds_deployed >= 20 && record.beds_deployed <= 600);
            assert!(record.occupancy_rate >= 0.2 && record.occupancy_rate < 1.25);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = RosterGenerator::with_seed(7).generate_roster(20);
        let second = RosterGenerator::with_seed(7).generate_roster(20);
        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn test_facilities_stay_near_center() {
        let mut generator = RosterGenerator::with_seed(3).with_center(51.16, 71.47).with_spread(0.05);
        let roster = generator.generate_roster(30);

        for coordinates in roster.records().iter().filter_map(|r| r.coordinates()) {
            // 0.05 degrees in both axes is well under 10 km at this latitude
            assert!(distance_between((51.16, 71.47), coordinates) < 10.0);
        }
    }

    #[test]
    fn test_non_finite_spread_is_ignored() {
        let mut generator = RosterGenerator::with_seed(5)
            .with_spread(0.03)
            .with_spread(f64::NAN)
            .with_spread(f64::INFINITY);
        assert_eq!(generator.spread_degrees, 0.03);

        let roster = generator.generate_roster(25);
        assert_eq!(roster.len(), 25);
        for coordinates in roster.records().iter().filter_map(|r| r.coordinates()) {
            assert!(distance_between(DEFAULT_CITY_CENTER, coordinates) < 10.0);
        }
    }
}
