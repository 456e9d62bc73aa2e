//! Bed Redirect Advisor
//!
//! Suggests where patients of an overloaded hospital can be redirected, based on
//! great-circle distance, free bed capacity and facility type compatibility.
//!
//! # Overview
//!
//! The facility statistics themselves come from an external provider; this
//! library works on whatever roster snapshot the caller holds in memory and
//! keeps no state of its own between calls.
//!
//! ## Key Features
//!
//! - **Alternative search**: Ranks nearby, under-loaded, compatible facilities
//! - **Type compatibility**: Static table with reverse-direction fallback
//! - **Redirection counts**: Patients to shed to reach the target occupancy
//! - **District grouping**: Overloaded facilities per district
//! - **Occupancy summary**: Bed-weighted load figures for the whole city
//!
//! ## Quick Start
//!
//! ```rust
//! use bed_redirect_advisor::*;
//!
//! let source = FacilityRecord::new(1, "City Hospital", 0.95, 200)
//!     .with_coordinates(43.25, 76.90);
//! let roster = vec![
//!     source.clone(),
//!     FacilityRecord::new(2, "City Hospital", 0.40, 100).with_coordinates(43.26, 76.91),
//!     FacilityRecord::new(3, "Maternity Hospital", 0.20, 80).with_coordinates(43.25, 76.91),
//! ];
//!
//! let alternatives = find_alternatives(&source, &roster, 15.0, 5);
//! assert_eq!(alternatives.len(), 1);
//! assert_eq!(alternatives[0].available_beds, 60);
//! assert!(is_compatible_facility_type("Perinatal Center", "Maternity Hospital"));
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and configuration
//! - [`facility`]: Facility records, rosters and geography
//! - [`redirection`]: Compatibility, alternative search and overload helpers
//! - [`advisor`]: Planning, statistics, logging and errors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Facility   │    │ Redirection │
//! │             │    │             │    │             │
//! │ FacilityId  │◄───┤ Records     │◄───┤ Compat.     │
//! │ Config      │    │ Roster      │    │ Finder      │
//! │             │    │ Geo         │    │ Overload    │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                  ▲                  ▲
//!        │                  │                  │
//!        └──────────┬───────┴──────────────────┘
//!                   │
//!            ┌─────────────┐
//!            │   Advisor   │
//!            │             │
//!            │ Planner     │
//!            │ Statistics  │
//!            └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod advisor;
pub mod facility;
pub mod redirection;
pub mod types;

// Core types and identifiers
pub use types::{
    AdvisorConfig, CliArgs, ConfigError, ConfigValidationError, FacilityId, OutputFormat,
};

// Facility types and functionality
pub use facility::{
    calculate_distance, FacilityRecord, FacilityRoster, RosterGenerator, OVERLOAD_THRESHOLD,
    TARGET_OCCUPANCY,
};

// Redirection core
pub use redirection::{
    calculate_redirection_count, compatibility_table, find_alternatives,
    group_overloaded_by_district, install_compatibility_table, is_compatible_facility_type,
    AlternativeFacility, AlternativeFinder, CompatibilityTable, DEFAULT_LIMIT,
    DEFAULT_MAX_DISTANCE_KM, UNKNOWN_DISTRICT,
};

// Planning, statistics and error handling
pub use advisor::{
    AdvisorError, AdvisorResult, DistrictSummary, LoggingConfig, OccupancySummary,
    RedirectionPlan, RedirectionPlanner, RedirectionReport,
};
