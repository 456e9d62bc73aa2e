//! Advisor orchestration and control
//!
//! This module contains the redirection planner, occupancy statistics,
//! logging setup and error handling.
//!
//! # Overview
//!
//! - **RedirectionPlanner**: Produces redirection plans for one facility or for every overloaded one
//! - **OccupancySummary**: City-wide and per-district load figures
//! - **LoggingConfig**: Tracing subscriber setup
//! - **AdvisorError**: Errors from configuration, roster loading and lookups
//!
//! # Usage Example
//!
//! ```rust
//! use bed_redirect_advisor::advisor::*;
//! use bed_redirect_advisor::facility::RosterGenerator;
//! use bed_redirect_advisor::redirection::CompatibilityTable;
//! use bed_redirect_advisor::types::AdvisorConfig;
//!
//! let roster = RosterGenerator::with_seed(11).generate_roster(40);
//! let planner = RedirectionPlanner::new(AdvisorConfig::default(), roster, CompatibilityTable::builtin());
//!
//! let report = planner.report();
//! assert_eq!(report.summary.total.facilities, 40);
//! ```

pub mod error;
pub mod logging;
pub mod planner;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use planner::*;
pub use statistics::*;
