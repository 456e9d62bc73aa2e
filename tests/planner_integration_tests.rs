//! Integration tests for the redirection planner
//!
//! Runs the planner over generated and file-backed rosters the way the binary
//! does, and checks the plans and report it produces.

use bed_redirect_advisor::{
    AdvisorConfig, AdvisorError, CompatibilityTable, FacilityId, FacilityRecord, FacilityRoster,
    RedirectionPlanner, RosterGenerator, UNKNOWN_DISTRICT,
};

fn demo_planner(config: AdvisorConfig) -> RedirectionPlanner {
    let roster = RosterGenerator::with_seed(2024).generate_roster(150);
    RedirectionPlanner::new(config, roster, CompatibilityTable::builtin())
}

/// Test that every overloaded facility gets exactly one plan
#[test]
fn test_plans_cover_overloaded_facilities() {
    let planner = demo_planner(AdvisorConfig::default());
    let overloaded = planner.roster().records().iter().filter(|r| r.is_overloaded()).count();

    let plans = planner.plans_by_district();
    let planned: usize = plans.values().map(Vec::len).sum();
    assert_eq!(planned, overloaded);

    for (district, district_plans) in &plans {
        for plan in district_plans {
            assert_eq!(plan.source.district_name().unwrap_or(UNKNOWN_DISTRICT), district.as_str());
            assert!(plan.alternatives.len() <= planner.config().limit);
            assert_eq!(
                plan.total_available_beds,
                plan.alternatives.iter().map(|a| u64::from(a.available_beds)).sum::<u64>()
            );
        }
    }
}

/// Test that the planner honours the configured search settings
#[test]
fn test_planner_uses_config() {
    let config = AdvisorConfig { max_distance_km: 3.0, limit: 2, ..Default::default() };
    let planner = demo_planner(config);

    for plans in planner.plans_by_district().values() {
        for plan in plans {
            assert!(plan.alternatives.len() <= 2);
            assert!(plan.alternatives.iter().all(|a| a.distance_km <= 3.0));
        }
    }
}

/// Test single facility plans and lookup failures
#[test]
fn test_plan_for_single_facility() {
    let roster = FacilityRoster::from_records(vec![
        FacilityRecord::new(10, "Emergency Hospital", 0.95, 300).with_coordinates(43.24, 76.95),
        FacilityRecord::new(11, "City Hospital", 0.55, 200).with_coordinates(43.25, 76.94),
        FacilityRecord::new(12, "Multi-Profile Hospital", 0.25, 400).with_coordinates(43.20, 76.90),
    ]);
    let planner = RedirectionPlanner::new(AdvisorConfig::default(), roster, CompatibilityTable::builtin());

    let plan = planner.plan_for(FacilityId(10)).unwrap();
    assert_eq!(plan.patients_to_redirect, 30);
    assert_eq!(plan.alternatives.len(), 2);
    // 300 free beds outweigh the extra distance
    assert_eq!(plan.alternatives[0].facility.id, FacilityId(12));
    assert!(plan.covers_demand());

    let err = planner.plan_for(FacilityId(99)).unwrap_err();
    assert!(matches!(err, AdvisorError::FacilityNotFound(FacilityId(99))));
    assert_eq!(err.category(), "Facility Lookup");
}

/// Test the JSON report of a generated roster
#[test]
fn test_report_serialization() {
    let planner = demo_planner(AdvisorConfig::default());
    let report = planner.report();

    assert_eq!(report.summary.total.facilities, 150);
    assert_eq!(report.plan_count(), report.summary.total.overloaded);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["generated_at"].is_string());
    assert!(json["plans"].is_object());
    assert_eq!(json["summary"]["total"]["facilities"], 150);
}

/// Test restricting plans to one district
#[test]
fn test_district_restriction() {
    let full = demo_planner(AdvisorConfig::default()).plans_by_district();
    let (district, expected) = full.iter().next().unwrap();

    let config = AdvisorConfig { district: Some(district.clone()), ..Default::default() };
    let restricted = demo_planner(config).plans_by_district();

    assert_eq!(restricted.len(), 1);
    assert_eq!(restricted[district].len(), expected.len());
}
