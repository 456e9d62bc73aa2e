//! Facility records as delivered by the hospitalization statistics provider
//!
//! A record is read-only input: the advisor never mutates it, it only filters,
//! scores and groups records.

use crate::types::FacilityId;
use serde::{Deserialize, Serialize};

/// Occupancy above which a facility counts as overloaded
pub const OVERLOAD_THRESHOLD: f64 = 0.7;

/// Occupancy a facility should be brought back down to by redirection
pub const TARGET_OCCUPANCY: f64 = 0.85;

/// A single healthcare facility with its current bed statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Identifier issued by the statistics provider
    pub id: FacilityId,
    /// Display name of the facility
    #[serde(default)]
    pub name: String,
    /// Category label used for compatibility matching
    pub facility_type: String,
    /// Administrative district, if known
    #[serde(default)]
    pub district: Option<String>,
    /// Used beds divided by deployed beds; exceeds 1.0 under overload
    pub occupancy_rate: f64,
    /// Total beds operated by the facility
    pub beds_deployed: u32,
    /// Latitude in decimal degrees
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl FacilityRecord {
    /// Create a new facility record without name, district or coordinates
    pub fn new(
        id: u64,
        facility_type: impl Into<String>,
        occupancy_rate: f64,
        beds_deployed: u32,
    ) -> Self {
        Self {
            id: FacilityId(id),
            name: String::new(),
            facility_type: facility_type.into(),
            district: None,
            occupancy_rate,
            beds_deployed,
            latitude: None,
            longitude: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the district
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Set the coordinates
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Usable coordinates, if any
    ///
    /// Missing values, non-finite values and the `(0, 0)` placeholder the
    /// provider emits for unknown locations all count as absent.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                if lat == 0.0 && lon == 0.0 {
                    None
                } else {
                    Some((lat, lon))
                }
            }
            _ => None,
        }
    }

    /// Whether the record has usable coordinates
    pub fn has_valid_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Free beds, `floor(beds_deployed * (1 - occupancy_rate))`
    ///
    /// Negative when the facility is over capacity.
    pub fn available_beds(&self) -> i64 {
        (self.beds_deployed as f64 * (1.0 - self.occupancy_rate)).floor() as i64
    }

    /// Estimated number of occupied beds
    pub fn occupied_beds(&self) -> f64 {
        self.beds_deployed as f64 * self.occupancy_rate
    }

    /// Whether occupancy exceeds [`OVERLOAD_THRESHOLD`]
    pub fn is_overloaded(&self) -> bool {
        self.occupancy_rate > OVERLOAD_THRESHOLD
    }

    /// Whether occupancy exceeds [`TARGET_OCCUPANCY`] so patients should be redirected
    pub fn needs_redirection(&self) -> bool {
        self.occupancy_rate > TARGET_OCCUPANCY
    }

    /// District name, treating blank values as unknown
    pub fn district_name(&self) -> Option<&str> {
        self.district.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    /// Name for display, falling back to the identifier
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            self.id.to_string()
        } else {
            self.name.clone()
        }
    }
}
