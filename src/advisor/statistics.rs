//! Occupancy statistics
//!
//! City-wide and per-district load figures for a facility roster.

use crate::facility::record::FacilityRecord;
use crate::redirection::overload::UNKNOWN_DISTRICT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Load figures for a group of facilities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistrictSummary {
    /// Number of facilities
    pub facilities: usize,
    /// Total beds deployed
    pub beds_deployed: u64,
    /// Estimated occupied beds
    pub occupied_beds: f64,
    /// Facilities above the overload threshold
    pub overloaded: usize,
    /// Facilities above the target occupancy
    pub critical: usize,
}

impl DistrictSummary {
    fn record(&mut self, facility: &FacilityRecord) {
        self.facilities += 1;
        self.beds_deployed += u64::from(facility.beds_deployed);
        self.occupied_beds += facility.occupied_beds();
        if facility.is_overloaded() {
            self.overloaded += 1;
        }
        if facility.needs_redirection() {
            self.critical += 1;
        }
    }

    /// Bed-weighted average occupancy (0 when no beds are deployed)
    pub fn average_occupancy(&self) -> f64 {
        if self.beds_deployed == 0 {
            0.0
        } else {
            self.occupied_beds / self.beds_deployed as f64
        }
    }
}

/// Summary of a whole roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupancySummary {
    /// Figures across all facilities
    pub total: DistrictSummary,
    /// Facilities with usable coordinates
    pub facilities_with_coordinates: usize,
    /// Figures per district
    pub districts: BTreeMap<String, DistrictSummary>,
}

impl OccupancySummary {
    /// Compute the summary for a set of facilities
    pub fn from_roster<'a, I>(facilities: I) -> Self
    where
        I: IntoIterator<Item = &'a FacilityRecord>,
    {
        let mut summary = Self::default();

        for facility in facilities {
            summary.total.record(facility);
            if facility.has_valid_coordinates() {
                summary.facilities_with_coordinates += 1;
            }

            let district = facility.district_name().unwrap_or(UNKNOWN_DISTRICT);
            summary.districts.entry(district.to_string()).or_default().record(facility);
        }

        summary
    }

    /// Share of facilities that are overloaded, in percent
    pub fn overloaded_percentage(&self) -> f64 {
        if self.total.facilities == 0 {
            0.0
        } else {
            self.total.overloaded as f64 / self.total.facilities as f64 * 100.0
        }
    }

    /// Render the summary for terminal output
    pub fn render_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Occupancy Summary\n");
        output.push_str("=================\n");
        output.push_str(&format!(
            "   Facilities: {} ({} with coordinates)\n",
            self.total.facilities, self.facilities_with_coordinates
        ));
        output.push_str(&format!(
            "   Beds: {} deployed, ~{:.0} occupied ({:.1}% average occupancy)\n",
            self.total.beds_deployed,
            self.total.occupied_beds,
            self.total.average_occupancy() * 100.0
        ));
        output.push_str(&format!(
            "   Overloaded: {} ({:.1}%), critical: {}\n",
            self.total.overloaded,
            self.overloaded_percentage(),
            self.total.critical
        ));

        if !self.districts.is_empty() {
            output.push_str("\nBy District:\n");
            for (district, figures) in &self.districts {
                output.push_str(&format!(
                    "   {:<20} {:>3} facilities, {:>6} beds, {:>5.1}% occupied, {} overloaded\n",
                    district,
                    figures.facilities,
                    figures.beds_deployed,
                    figures.average_occupancy() * 100.0,
                    figures.overloaded
                ));
            }
        }

        output
    }
}
