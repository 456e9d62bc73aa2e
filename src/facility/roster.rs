//! Facility roster and lookup
//!
//! This module contains the FacilityRoster struct: the in-memory snapshot of all
//! facilities the caller currently knows about, with an id index for lookups.

use crate::advisor::error::{AdvisorError, AdvisorResult};
use crate::facility::record::FacilityRecord;
use crate::types::FacilityId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// A collection of facility records with lookup capabilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityRoster {
    /// All facilities, in provider order
    records: Vec<FacilityRecord>,
    /// Quick lookup map from facility ID to index
    #[serde(skip)]
    index: HashMap<FacilityId, usize>,
}

impl FacilityRoster {
    /// Create a new empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from records, keeping the first record for duplicate ids
    pub fn from_records(records: impl IntoIterator<Item = FacilityRecord>) -> Self {
        let mut roster = Self::new();
        for record in records {
            roster.add(record);
        }
        roster
    }

    /// Parse a JSON array of facility records
    pub fn from_json_str(content: &str) -> AdvisorResult<Self> {
        let records: Vec<FacilityRecord> = serde_json::from_str(content)
            .map_err(|e| AdvisorError::roster_error(format!("Invalid roster JSON: {}", e)))?;
        Ok(Self::from_records(records))
    }

    /// Load a roster from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AdvisorResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AdvisorError::roster_error(format!(
                "Roster file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let roster = Self::from_json_str(&content)?;
        info!("Loaded {} facilities from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Add a record; returns false if the id was already present
    pub fn add(&mut self, record: FacilityRecord) -> bool {
        if self.index.contains_key(&record.id) {
            warn!("Duplicate facility id {} in roster, keeping the first record", record.id);
            return false;
        }

        debug!("Adding facility {} ({})", record.id, record.facility_type);
        self.index.insert(record.id, self.records.len());
        self.records.push(record);
        true
    }

    /// Rebuild the id index (needed after deserializing a roster directly)
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (idx, record) in self.records.iter().enumerate() {
            self.index.entry(record.id).or_insert(idx);
        }
    }

    /// Get a facility by ID
    pub fn get(&self, id: FacilityId) -> Option<&FacilityRecord> {
        self.index.get(&id).and_then(|&idx| self.records.get(idx))
    }

    /// Whether the roster contains a facility
    pub fn contains(&self, id: FacilityId) -> bool {
        self.index.contains_key(&id)
    }

    /// All facilities in provider order
    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    /// Number of facilities
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct known district names, sorted
    pub fn districts(&self) -> BTreeSet<&str> {
        self.records.iter().filter_map(|r| r.district_name()).collect()
    }

    /// Facilities of a given type
    pub fn facilities_of_type<'a>(&'a self, facility_type: &'a str) -> impl Iterator<Item = &'a FacilityRecord> + 'a {
        self.records.iter().filter(move |r| r.facility_type == facility_type)
    }
}
