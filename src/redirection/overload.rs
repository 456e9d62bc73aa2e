//! Overload helpers
//!
//! How many patients an overloaded facility should shed, and which facilities
//! are overloaded per district.

use crate::facility::record::{FacilityRecord, TARGET_OCCUPANCY};
use std::collections::BTreeMap;

/// Group key for facilities without a district
pub const UNKNOWN_DISTRICT: &str = "Unknown district";

/// Patients to redirect so that `source` gets back down to the target occupancy
///
/// Zero at or below the target, otherwise
/// `ceil((occupancy_rate - 0.85) * beds_deployed)`.
pub fn calculate_redirection_count(source: &FacilityRecord) -> u32 {
    if source.occupancy_rate <= TARGET_OCCUPANCY {
        return 0;
    }

    ((source.occupancy_rate - TARGET_OCCUPANCY) * source.beds_deployed as f64).ceil() as u32
}

/// Overloaded facilities keyed by district, preserving roster order within a group
pub fn group_overloaded_by_district<'a, I>(all_facilities: I) -> BTreeMap<String, Vec<&'a FacilityRecord>>
where
    I: IntoIterator<Item = &'a FacilityRecord>,
{
    let mut groups: BTreeMap<String, Vec<&'a FacilityRecord>> = BTreeMap::new();

    for facility in all_facilities.into_iter().filter(|f| f.is_overloaded()) {
        let district = facility.district_name().unwrap_or(UNKNOWN_DISTRICT);
        groups.entry(district.to_string()).or_default().push(facility);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FacilityId;

    #[test]
    fn test_no_redirection_at_or_below_target() {
        for occupancy in [0.0, 0.5, 0.7, 0.84, 0.85] {
            let record = FacilityRecord::new(1, "A", occupancy, 300);
            assert_eq!(calculate_redirection_count(&record), 0);
        }
    }

    #[test]
    fn test_redirection_count() {
        assert_eq!(calculate_redirection_count(&FacilityRecord::new(1, "A", 0.95, 100)), 10);
        assert_eq!(calculate_redirection_count(&FacilityRecord::new(1, "A", 1.2, 200)), 70);
        // Partial patients round up
        assert_eq!(calculate_redirection_count(&FacilityRecord::new(1, "A", 0.86, 150)), 2);
        assert_eq!(calculate_redirection_count(&FacilityRecord::new(1, "A", 1.5, 0)), 0);
    }

    #[test]
    fn test_group_overloaded_by_district() {
        let roster = vec![
            FacilityRecord::new(1, "A", 0.9, 100).with_district("Almaly"),
            FacilityRecord::new(2, "A", 0.5, 100).with_district("Almaly"),
            FacilityRecord::new(3, "A", 0.75, 100).with_district("Medeu"),
            FacilityRecord::new(4, "A", 1.1, 100),
            FacilityRecord::new(5, "A", 0.8, 100).with_district("Almaly"),
            FacilityRecord::new(6, "A", 0.7, 100).with_district("Medeu"),
            FacilityRecord::new(7, "A", 0.95, 100).with_district(""),
        ];

        let groups = group_overloaded_by_district(&roster);
        assert_eq!(groups.len(), 3);

        let almaly: Vec<FacilityId> = groups["Almaly"].iter().map(|f| f.id).collect();
        assert_eq!(almaly, vec![FacilityId(1), FacilityId(5)]);

        let medeu: Vec<FacilityId> = groups["Medeu"].iter().map(|f| f.id).collect();
        assert_eq!(medeu, vec![FacilityId(3)]);

        let unknown: Vec<FacilityId> = groups[UNKNOWN_DISTRICT].iter().map(|f| f.id).collect();
        assert_eq!(unknown, vec![FacilityId(4), FacilityId(7)]);
    }

    #[test]
    fn test_group_empty_roster() {
        let roster: Vec<FacilityRecord> = Vec::new();
        assert!(group_overloaded_by_district(&roster).is_empty());
    }
}
