//! Error types and handling
//!
//! The redirection core itself never fails; these errors cover the ambient
//! work around it: configuration, loading rosters and tables, and lookups.

use crate::types::FacilityId;
use thiserror::Error;

/// Errors that can occur while preparing or producing redirection plans
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Facility roster could not be loaded
    #[error("Roster error: {0}")]
    RosterError(String),

    /// Requested facility is not in the roster
    #[error("Facility not found: {0}")]
    FacilityNotFound(FacilityId),

    /// Compatibility table could not be loaded or installed
    #[error("Compatibility table error: {0}")]
    CompatibilityTableError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<crate::types::ConfigError> for AdvisorError {
    fn from(error: crate::types::ConfigError) -> Self {
        AdvisorError::ConfigurationError(error.to_string())
    }
}

impl From<crate::types::ConfigValidationError> for AdvisorError {
    fn from(error: crate::types::ConfigValidationError) -> Self {
        AdvisorError::ConfigurationError(error.to_string())
    }
}

impl AdvisorError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a roster error
    pub fn roster_error(msg: impl Into<String>) -> Self {
        Self::RosterError(msg.into())
    }

    /// Create a compatibility table error
    pub fn compatibility_table_error(msg: impl Into<String>) -> Self {
        Self::CompatibilityTableError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            AdvisorError::ConfigurationError(_) => "Configuration",
            AdvisorError::RosterError(_) => "Roster",
            AdvisorError::FacilityNotFound(_) => "Facility Lookup",
            AdvisorError::CompatibilityTableError(_) => "Compatibility Table",
            AdvisorError::IoError(_) => "IO",
            AdvisorError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for advisor operations
pub type AdvisorResult<T> = Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConfigValidationError;

    #[test]
    fn test_error_creation() {
        let config_error = AdvisorError::configuration_error("bad radius");
        assert!(matches!(config_error, AdvisorError::ConfigurationError(_)));
        assert_eq!(config_error.category(), "Configuration");
        assert_eq!(config_error.to_string(), "Configuration error: bad radius");

        let not_found = AdvisorError::FacilityNotFound(FacilityId(8));
        assert_eq!(not_found.category(), "Facility Lookup");
        assert_eq!(not_found.to_string(), "Facility not found: FAC_8");
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AdvisorError = io_error.into();
        assert_eq!(error.category(), "IO");

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: AdvisorError = json_error.into();
        assert_eq!(error.category(), "Serialization");

        let error: AdvisorError = ConfigValidationError::InvalidLimit(0).into();
        assert!(error.to_string().contains("Result limit must be greater than 0"));
    }
}
