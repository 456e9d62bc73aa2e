//! Redirection planning
//!
//! The planner ties a roster, a compatibility table and the search settings
//! together and produces per-facility redirection plans.

use crate::advisor::error::{AdvisorError, AdvisorResult};
use crate::advisor::statistics::OccupancySummary;
use crate::facility::{FacilityRecord, FacilityRoster};
use crate::redirection::{
    calculate_redirection_count, group_overloaded_by_district, AlternativeFacility,
    AlternativeFinder, CompatibilityTable,
};
use crate::types::{AdvisorConfig, FacilityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Redirection suggestion for one overloaded facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectionPlan {
    /// The facility patients are redirected away from
    pub source: FacilityRecord,
    /// Patients to redirect to get back to the target occupancy
    pub patients_to_redirect: u32,
    /// Ranked alternatives, best first
    pub alternatives: Vec<AlternativeFacility>,
    /// Free beds across all suggested alternatives
    pub total_available_beds: u64,
}

impl RedirectionPlan {
    /// Whether the suggested alternatives can absorb every patient to redirect
    pub fn covers_demand(&self) -> bool {
        self.total_available_beds >= u64::from(self.patients_to_redirect)
    }

    /// Render the plan for terminal output
    pub fn render_text(&self) -> String {
        let mut output = format!(
            "{} [{}] - {:.0}% occupied, {} beds, redirect {} patients\n",
            self.source.display_name(),
            self.source.facility_type,
            self.source.occupancy_rate * 100.0,
            self.source.beds_deployed,
            self.patients_to_redirect
        );

        if self.alternatives.is_empty() {
            output.push_str("   no suitable alternatives nearby\n");
            return output;
        }

        for (rank, alternative) in self.alternatives.iter().enumerate() {
            output.push_str(&format!(
                "   {}. {} [{}] - {:.1} km (~{} min), {} free beds\n",
                rank + 1,
                alternative.facility.display_name(),
                alternative.facility.facility_type,
                alternative.distance_km,
                alternative.travel_time_minutes,
                alternative.available_beds
            ));
        }

        if !self.covers_demand() {
            output.push_str(&format!(
                "   shortfall: {} patients without a suggested bed\n",
                u64::from(self.patients_to_redirect) - self.total_available_beds
            ));
        }

        output
    }
}

/// Everything the advisor reports for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectionReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Roster-wide occupancy figures
    pub summary: OccupancySummary,
    /// Plans for overloaded facilities, by district
    pub plans: BTreeMap<String, Vec<RedirectionPlan>>,
}

impl RedirectionReport {
    /// Number of plans across all districts
    pub fn plan_count(&self) -> usize {
        self.plans.values().map(Vec::len).sum()
    }
}

/// Produces redirection plans for a roster
#[derive(Debug, Clone)]
pub struct RedirectionPlanner {
    config: AdvisorConfig,
    roster: FacilityRoster,
    table: CompatibilityTable,
}

impl RedirectionPlanner {
    /// Create a planner over a roster with the given compatibility table
    pub fn new(config: AdvisorConfig, roster: FacilityRoster, table: CompatibilityTable) -> Self {
        Self { config, roster, table }
    }

    /// The configuration in use
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// The roster being planned over
    pub fn roster(&self) -> &FacilityRoster {
        &self.roster
    }

    fn finder(&self) -> AlternativeFinder<'_> {
        AlternativeFinder::new(&self.table)
            .with_max_distance_km(self.config.max_distance_km)
            .with_limit(self.config.limit)
    }

    fn build_plan(&self, finder: &AlternativeFinder<'_>, source: &FacilityRecord) -> RedirectionPlan {
        let alternatives = finder.find(source, self.roster.records());
        let total_available_beds = alternatives.iter().map(|a| u64::from(a.available_beds)).sum();

        RedirectionPlan {
            source: source.clone(),
            patients_to_redirect: calculate_redirection_count(source),
            alternatives,
            total_available_beds,
        }
    }

    /// Plan redirections away from a single facility
    pub fn plan_for(&self, id: FacilityId) -> AdvisorResult<RedirectionPlan> {
        let source = self.roster.get(id).ok_or(AdvisorError::FacilityNotFound(id))?;
        let plan = self.build_plan(&self.finder(), source);

        crate::advisor_event!(
            info,
            "planned redirection",
            facility = id.value(),
            patients = plan.patients_to_redirect,
            alternatives = plan.alternatives.len(),
        );

        Ok(plan)
    }

    /// Plan redirections for every overloaded facility, grouped by district
    ///
    /// Restricted to the configured district when one is set.
    pub fn plans_by_district(&self) -> BTreeMap<String, Vec<RedirectionPlan>> {
        let span = crate::perf_span!("plans_by_district", facilities = self.roster.len());
        let _entered = span.enter();

        let finder = self.finder();
        let wanted = self.config.district.as_deref().map(str::trim);

        let plans: BTreeMap<String, Vec<RedirectionPlan>> =
            group_overloaded_by_district(self.roster.records())
                .into_iter()
                .filter(|(district, _)| wanted.map_or(true, |w| w == district.as_str()))
                .map(|(district, sources)| {
                    let district_plans: Vec<RedirectionPlan> =
                        sources.into_iter().map(|s| self.build_plan(&finder, s)).collect();
                    (district, district_plans)
                })
                .collect();

        info!(
            "Planned redirections for {} overloaded facilities in {} districts",
            plans.values().map(Vec::len).sum::<usize>(),
            plans.len()
        );

        plans
    }

    /// Occupancy summary of the roster
    pub fn summary(&self) -> OccupancySummary {
        OccupancySummary::from_roster(self.roster.records())
    }

    /// Full report: summary plus all district plans
    pub fn report(&self) -> RedirectionReport {
        RedirectionReport {
            generated_at: Utc::now(),
            summary: self.summary(),
            plans: self.plans_by_district(),
        }
    }
}
