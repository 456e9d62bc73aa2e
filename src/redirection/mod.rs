//! Patient redirection core
//!
//! This module decides where patients of an overloaded facility can be sent.
//!
//! # Overview
//!
//! - **Compatibility**: Static facility type table with reverse-direction fallback
//! - **AlternativeFinder**: Filters, scores and ranks candidate facilities
//! - **Overload helpers**: Redirection counts and per-district grouping
//!
//! Everything here is synchronous and side-effect free apart from log output;
//! the only shared state is the read-only process-wide compatibility table.
//!
//! # Usage Example
//!
//! ```rust
//! use bed_redirect_advisor::facility::FacilityRecord;
//! use bed_redirect_advisor::redirection::*;
//!
//! let source = FacilityRecord::new(1, "City Hospital", 0.95, 200)
//!     .with_coordinates(43.25, 76.90);
//! let roster = vec![
//!     source.clone(),
//!     FacilityRecord::new(2, "Emergency Hospital", 0.4, 150).with_coordinates(43.27, 76.93),
//! ];
//!
//! let alternatives = find_alternatives(&source, &roster, DEFAULT_MAX_DISTANCE_KM, DEFAULT_LIMIT);
//! assert_eq!(alternatives.len(), 1);
//! assert_eq!(calculate_redirection_count(&source), 20);
//! ```

pub mod compatibility;
pub mod finder;
pub mod overload;

// Re-export all public types for convenience
pub use compatibility::*;
pub use finder::*;
pub use overload::*;
