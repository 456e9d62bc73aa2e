//! Configuration structures for the redirection advisor
//!
//! This module contains the advisor configuration structure and validation logic
//! used to control where the facility roster comes from and how alternatives
//! are searched and reported.

use super::{FacilityId, OutputFormat};
use crate::redirection::finder::{DEFAULT_LIMIT, DEFAULT_MAX_DISTANCE_KM};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bed-redirect-advisor",
    version = "0.1.0",
    about = "Bed Redirect Advisor - Suggests alternative hospitals for overloaded facilities",
    long_about = "Ranks nearby, under-loaded and type-compatible hospitals as redirection targets for overloaded facilities, using great-circle distance and free bed capacity.

EXAMPLES:
    # Plan redirections for every overloaded facility in a roster
    bed-redirect-advisor --roster facilities.json

    # Alternatives for a single facility, as JSON
    bed-redirect-advisor --roster facilities.json --facility-id 12 --output-format json

    # Try it out on a generated roster
    bed-redirect-advisor --demo-facilities 60 --seed 7 --summary

    # Generate configuration template
    bed-redirect-advisor --print-config > my-config.json

    # Validate configuration without running
    bed-redirect-advisor --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Facility roster file (JSON array of facility records)
    #[arg(long, help = "Facility roster file (JSON array)")]
    pub roster: Option<String>,

    /// Custom facility type compatibility table (JSON object)
    #[arg(
        long,
        help = "Facility type compatibility table (JSON)",
        long_help = "JSON object mapping a facility type to the list of facility types it can exchange patients with. Replaces the built-in table."
    )]
    pub compatibility_table: Option<String>,

    /// Only plan for this facility
    #[arg(long, help = "Plan redirections for a single facility id")]
    pub facility_id: Option<u64>,

    /// Only plan for overloaded facilities in this district
    #[arg(long, help = "Restrict district plans to one district")]
    pub district: Option<String>,

    /// Maximum distance to an alternative facility in kilometers
    #[arg(
        long,
        help = "Maximum distance to alternatives in km",
        long_help = "Alternatives farther than this great-circle distance are never suggested. Must be greater than 0. Default: 15"
    )]
    pub max_distance_km: Option<f64>,

    /// Maximum number of alternatives per facility
    #[arg(long, help = "Maximum alternatives per facility. Default: 5")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for plans and summaries. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Generate a demo roster with this many facilities instead of reading one
    #[arg(long, help = "Generate a demo roster with N facilities")]
    pub demo_facilities: Option<usize>,

    /// Random seed for the demo roster
    #[arg(long, help = "Random seed for reproducible demo rosters")]
    pub seed: Option<u64>,

    /// Print the occupancy summary before the plans
    #[arg(long, help = "Print the occupancy summary")]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without planning
    #[arg(long, help = "Validate configuration without planning")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Facility roster file
    pub roster_path: Option<String>,

    /// Custom compatibility table file
    pub compatibility_table_path: Option<String>,

    /// Single facility to plan for
    pub facility_id: Option<FacilityId>,

    /// District restriction
    pub district: Option<String>,

    /// Maximum distance to alternatives in kilometers
    pub max_distance_km: Option<f64>,

    /// Maximum alternatives per facility
    pub limit: Option<usize>,

    /// Output format
    pub output_format: Option<String>,

    /// Demo roster size
    pub demo_facility_count: Option<usize>,

    /// Random seed for the demo roster
    pub seed: Option<u64>,
}

/// Configuration for the redirection advisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Facility roster file (JSON array of facility records)
    pub roster_path: Option<String>,

    /// Custom compatibility table file, replacing the built-in table
    pub compatibility_table_path: Option<String>,

    /// Plan for this facility only
    pub facility_id: Option<FacilityId>,

    /// Restrict district plans to this district
    pub district: Option<String>,

    /// Maximum distance to alternatives in kilometers
    pub max_distance_km: f64,

    /// Maximum alternatives per facility
    pub limit: usize,

    /// Output format (text or json)
    pub output_format: String,

    /// Number of facilities to generate when no roster file is given (0 disables)
    pub demo_facility_count: usize,

    /// Random seed for the demo roster
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for advisor configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Search radius is not a positive finite number
    #[error("Maximum distance must be a positive number of kilometers, got {0}")]
    InvalidMaxDistance(f64),

    /// Result limit is zero
    #[error("Result limit must be greater than 0, got {0}")]
    InvalidLimit(usize),

    /// Output format is not recognised
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),

    /// Neither a roster file nor a demo roster was requested
    #[error("No facility roster configured: set roster_path or demo_facility_count")]
    MissingRoster,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            compatibility_table_path: None,
            facility_id: None,
            district: None,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            limit: DEFAULT_LIMIT,
            output_format: "text".to_string(),
            demo_facility_count: 0,
            seed: None,
        }
    }
}

impl AdvisorConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            roster_path: config_file.roster_path.or(defaults.roster_path),
            compatibility_table_path: config_file
                .compatibility_table_path
                .or(defaults.compatibility_table_path),
            facility_id: config_file.facility_id.or(defaults.facility_id),
            district: config_file.district.or(defaults.district),
            max_distance_km: config_file.max_distance_km.unwrap_or(defaults.max_distance_km),
            limit: config_file.limit.unwrap_or(defaults.limit),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            demo_facility_count: config_file
                .demo_facility_count
                .unwrap_or(defaults.demo_facility_count),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.roster {
            config.roster_path = Some(value);
        }
        if let Some(value) = args.compatibility_table {
            config.compatibility_table_path = Some(value);
        }
        if let Some(value) = args.facility_id {
            config.facility_id = Some(FacilityId(value));
        }
        if let Some(value) = args.district {
            config.district = Some(value);
        }
        if let Some(value) = args.max_distance_km {
            config.max_distance_km = value;
        }
        if let Some(value) = args.limit {
            config.limit = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.demo_facilities {
            config.demo_facility_count = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.max_distance_km.is_finite() || self.max_distance_km <= 0.0 {
            return Err(ConfigValidationError::InvalidMaxDistance(self.max_distance_km));
        }

        if self.limit == 0 {
            return Err(ConfigValidationError::InvalidLimit(self.limit));
        }

        if self.get_output_format().is_err() {
            return Err(ConfigValidationError::InvalidOutputFormat(self.output_format.clone()));
        }

        if self.roster_path.is_none() && self.demo_facility_count == 0 {
            return Err(ConfigValidationError::MissingRoster);
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// Whether the roster should be generated rather than read from disk
    pub fn uses_demo_roster(&self) -> bool {
        self.roster_path.is_none() && self.demo_facility_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            config: None,
            roster: None,
            compatibility_table: None,
            facility_id: None,
            district: None,
            max_distance_km: None,
            limit: None,
            output_format: None,
            demo_facilities: None,
            seed: None,
            summary: false,
            verbose: false,
            debug: false,
            dry_run: false,
            print_config: false,
        }
    }

    #[test]
    fn test_advisor_config_default() {
        let config = AdvisorConfig::default();

        assert!(config.roster_path.is_none());
        assert!(config.compatibility_table_path.is_none());
        assert!(config.facility_id.is_none());
        assert_eq!(config.max_distance_km, 15.0);
        assert_eq!(config.limit, 5);
        assert_eq!(config.output_format, "text");
        assert_eq!(config.demo_facility_count, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_default_config_requires_roster() {
        let config = AdvisorConfig::default();
        assert!(matches!(config.validate(), Err(ConfigValidationError::MissingRoster)));

        let config = AdvisorConfig { roster_path: Some("roster.json".to_string()), ..Default::default() };
        assert!(config.validate().is_ok());
        assert!(!config.uses_demo_roster());
    }

    #[test]
    fn test_cli_parsing() {
        let args = vec![
            "test",
            "--roster",
            "facilities.json",
            "--facility-id",
            "12",
            "--max-distance-km",
            "7.5",
            "--limit",
            "3",
            "--output-format",
            "json",
            "--summary",
        ];
        let cli_args = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(cli_args.roster.as_deref(), Some("facilities.json"));
        assert_eq!(cli_args.facility_id, Some(12));
        assert_eq!(cli_args.max_distance_km, Some(7.5));
        assert_eq!(cli_args.limit, Some(3));
        assert!(cli_args.summary);
        assert!(!cli_args.dry_run);
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs {
            roster: Some("roster.json".to_string()),
            facility_id: Some(3),
            limit: Some(2),
            output_format: Some("json".to_string()),
            ..empty_args()
        };

        let config = AdvisorConfig::from_cli_args(args).unwrap();
        assert_eq!(config.roster_path.as_deref(), Some("roster.json"));
        assert_eq!(config.facility_id, Some(FacilityId(3)));
        assert_eq!(config.limit, 2);
        assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
        // Untouched values keep their defaults
        assert_eq!(config.max_distance_km, 15.0);
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "roster_path": "almaty.json",
            "max_distance_km": 8.0,
            "limit": 4,
            "district": "Bostandyk",
            "facility_id": 21
        }"#;

        temp_file.write_all(config_json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = AdvisorConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.roster_path.as_deref(), Some("almaty.json"));
        assert_eq!(config.max_distance_km, 8.0);
        assert_eq!(config.limit, 4);
        assert_eq!(config.district.as_deref(), Some("Bostandyk"));
        assert_eq!(config.facility_id, Some(FacilityId(21)));
        assert_eq!(config.output_format, "text");
    }

    #[test]
    fn test_cli_overrides_config_file() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(br#"{ "roster_path": "a.json", "limit": 4 }"#).unwrap();
        temp_file.flush().unwrap();

        let args = CliArgs {
            config: Some(temp_file.path().display().to_string()),
            limit: Some(9),
            ..empty_args()
        };

        let config = AdvisorConfig::from_cli_args(args).unwrap();
        assert_eq!(config.roster_path.as_deref(), Some("a.json"));
        assert_eq!(config.limit, 9);
    }

    #[test]
    fn test_config_file_errors() {
        let missing = AdvisorConfig::from_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

        let temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let unsupported = AdvisorConfig::from_file(temp_file.path());
        assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"));
    }

    #[test]
    fn test_validation_max_distance() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = AdvisorConfig {
                max_distance_km: bad,
                demo_facility_count: 10,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigValidationError::InvalidMaxDistance(_))
            ));
        }
    }

    #[test]
    fn test_validation_limit_and_format() {
        let config = AdvisorConfig { limit: 0, demo_facility_count: 10, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidLimit(0))));

        let config = AdvisorConfig {
            output_format: "csv".to_string(),
            demo_facility_count: 10,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidOutputFormat(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = AdvisorConfig { demo_facility_count: 25, seed: Some(9), ..Default::default() };
        let json = config.print_json().unwrap();
        assert!(json.contains("\"max_distance_km\": 15.0"));
        assert!(json.contains("\"demo_facility_count\": 25"));

        let parsed: AdvisorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.seed, Some(9));
        assert_eq!(parsed.limit, 5);
    }
}
