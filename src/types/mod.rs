//! Core types and identifiers for the redirection advisor
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the advisor.
//!
//! # Overview
//!
//! - **Identifiers**: Integer-backed facility identifiers as issued by the statistics provider
//! - **Enums**: Output format selection
//! - **Configuration**: Advisor configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use bed_redirect_advisor::types::*;
//!
//! let facility_id = FacilityId::new(17);
//! assert_eq!(facility_id.to_string(), "FAC_17");
//!
//! let config = AdvisorConfig {
//!     max_distance_km: 10.0,
//!     limit: 3,
//!     demo_facility_count: 40,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
