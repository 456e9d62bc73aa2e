//! Alternative facility search
//!
//! Given an overloaded facility and the current roster, this module finds the
//! facilities patients could be redirected to: not the source itself, under
//! load, type-compatible, located, with free beds, and within reach. Survivors
//! are ranked by a blended distance/capacity score where lower is better.

use crate::facility::geo::{calculate_distance, travel_time_minutes};
use crate::facility::record::{FacilityRecord, OVERLOAD_THRESHOLD};
use crate::redirection::compatibility::{compatibility_table, CompatibilityTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default search radius in kilometers
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 15.0;

/// Default number of alternatives returned
pub const DEFAULT_LIMIT: usize = 5;

/// Weight of the distance term in the ranking score
pub const DISTANCE_WEIGHT: f64 = 0.7;

/// Weight of the free capacity term in the ranking score
pub const CAPACITY_WEIGHT: f64 = 0.3;

/// Free beds are counted in units of this many beds in the ranking score
pub const CAPACITY_UNIT_BEDS: f64 = 10.0;

/// A candidate facility that can take redirected patients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeFacility {
    /// The candidate facility
    pub facility: FacilityRecord,
    /// Great-circle distance from the source facility
    pub distance_km: f64,
    /// Free beds at the candidate
    pub available_beds: u32,
    /// Estimated travel time at a fixed average speed
    pub travel_time_minutes: u32,
    /// Ranking score, lower is better
    pub score: f64,
}

/// Ranking score: `0.7 * distance - 0.3 * (free beds / 10)`
pub fn redirection_score(distance_km: f64, available_beds: u32) -> f64 {
    DISTANCE_WEIGHT * distance_km - CAPACITY_WEIGHT * (available_beds as f64 / CAPACITY_UNIT_BEDS)
}

/// Searches a roster for redirection targets using a given compatibility table
#[derive(Debug, Clone, Copy)]
pub struct AlternativeFinder<'t> {
    table: &'t CompatibilityTable,
    max_distance_km: f64,
    limit: usize,
}

impl<'t> AlternativeFinder<'t> {
    /// Create a finder with the default radius and limit
    pub fn new(table: &'t CompatibilityTable) -> Self {
        Self { table, max_distance_km: DEFAULT_MAX_DISTANCE_KM, limit: DEFAULT_LIMIT }
    }

    /// Set the search radius
    pub fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }

    /// Set the maximum number of results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Search radius in kilometers
    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    /// Maximum number of results
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether a facility passes the cheap pre-filters for `source`
    fn is_candidate(&self, source: &FacilityRecord, candidate: &FacilityRecord) -> bool {
        candidate.id != source.id
            && candidate.occupancy_rate < OVERLOAD_THRESHOLD
            && self.table.is_compatible(&source.facility_type, &candidate.facility_type)
            && candidate.has_valid_coordinates()
            && candidate.beds_deployed > 0
    }

    /// Rank the redirection targets for `source` among `all_facilities`
    ///
    /// Never fails: an empty roster, a source without coordinates or no
    /// qualifying candidate all yield an empty list. Ties keep roster order.
    pub fn find<'a, I>(&self, source: &FacilityRecord, all_facilities: I) -> Vec<AlternativeFacility>
    where
        I: IntoIterator<Item = &'a FacilityRecord>,
    {
        // Missing source coordinates make every distance NaN, which no radius accepts
        let (source_lat, source_lon) = source.coordinates().unwrap_or_else(|| {
            warn!("Source facility {} has no valid coordinates, no alternatives possible", source.id);
            (f64::NAN, f64::NAN)
        });

        let mut alternatives: Vec<AlternativeFacility> = all_facilities
            .into_iter()
            .filter(|candidate| self.is_candidate(source, candidate))
            .filter_map(|candidate| {
                let (lat, lon) = candidate.coordinates()?;
                let distance_km = calculate_distance(source_lat, source_lon, lat, lon);
                let free_beds = candidate.available_beds();

                if !(distance_km <= self.max_distance_km) || free_beds <= 0 {
                    return None;
                }

                let available_beds = u32::try_from(free_beds).ok()?;
                Some(AlternativeFacility {
                    facility: candidate.clone(),
                    distance_km,
                    available_beds,
                    travel_time_minutes: travel_time_minutes(distance_km),
                    score: redirection_score(distance_km, available_beds),
                })
            })
            .collect();

        // Stable sort keeps roster order among equal scores
        alternatives.sort_by(|a, b| a.score.total_cmp(&b.score));
        alternatives.truncate(self.limit);

        debug!(
            "Found {} alternatives for facility {} within {} km",
            alternatives.len(),
            source.id,
            self.max_distance_km
        );

        alternatives
    }
}

/// Rank redirection targets for `source` using the process-wide compatibility table
pub fn find_alternatives(
    source: &FacilityRecord,
    all_facilities: &[FacilityRecord],
    max_distance_km: f64,
    limit: usize,
) -> Vec<AlternativeFacility> {
    AlternativeFinder::new(compatibility_table())
        .with_max_distance_km(max_distance_km)
        .with_limit(limit)
        .find(source, all_facilities)
}
