//! Identifier types for the redirection advisor
//!
//! Facility identifiers come from the external statistics provider as plain
//! integers, so the newtype serializes transparently as a JSON number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a healthcare facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(pub u64);

impl FacilityId {
    /// Create a facility ID from the provider's integer identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for FacilityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FAC_{}", self.0)
    }
}

impl FromStr for FacilityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the display form and the raw integer
        let raw = s.strip_prefix("FAC_").unwrap_or(s);
        raw.trim()
            .parse::<u64>()
            .map(FacilityId)
            .map_err(|e| format!("Invalid facility id '{}': {}", s, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_id_display() {
        let id = FacilityId::new(42);
        assert_eq!(id.to_string(), "FAC_42");
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_facility_id_parsing() {
        assert_eq!("FAC_7".parse::<FacilityId>().unwrap(), FacilityId(7));
        assert_eq!("7".parse::<FacilityId>().unwrap(), FacilityId(7));
        assert!("FAC_x".parse::<FacilityId>().is_err());
        assert!("".parse::<FacilityId>().is_err());
    }

    #[test]
    fn test_facility_id_serializes_as_number() {
        let json = serde_json::to_string(&FacilityId(15)).unwrap();
        assert_eq!(json, "15");

        let id: FacilityId = serde_json::from_str("15").unwrap();
        assert_eq!(id, FacilityId(15));
    }
}
