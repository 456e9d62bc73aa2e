//! Facility records, roster management and geography
//!
//! # Overview
//!
//! - **FacilityRecord**: One facility with its bed statistics and location
//! - **FacilityRoster**: The in-memory snapshot of all facilities, indexed by id
//! - **Geo helpers**: Haversine distance and fixed-speed travel time
//! - **RosterGenerator**: Seedable demo rosters scattered around a city centre
//!
//! # Usage Example
//!
//! ```rust
//! use bed_redirect_advisor::facility::*;
//!
//! let roster = FacilityRoster::from_records(vec![
//!     FacilityRecord::new(1, "City Hospital", 0.92, 250).with_coordinates(43.25, 76.90),
//!     FacilityRecord::new(2, "City Hospital", 0.41, 180).with_coordinates(43.22, 76.85),
//! ]);
//!
//! let a = roster.records()[0].coordinates().unwrap();
//! let b = roster.records()[1].coordinates().unwrap();
//! assert!(distance_between(a, b) < 10.0);
//!
//! // Generate a demo roster
//! let demo = RosterGenerator::with_seed(1).generate_roster(25);
//! assert_eq!(demo.len(), 25);
//! ```

pub mod generator;
pub mod geo;
pub mod record;
pub mod roster;

// Re-export all public types for convenience
pub use generator::RosterGenerator;
pub use geo::{calculate_distance, distance_between, travel_time_minutes};
pub use record::{FacilityRecord, OVERLOAD_THRESHOLD, TARGET_OCCUPANCY};
pub use roster::FacilityRoster;
