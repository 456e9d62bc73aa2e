//! Facility type compatibility
//!
//! Which facility types may take over patients from which. The table is static
//! domain data and frequently only records one direction of a relation, so a
//! lookup falls back to the reverse direction when the source type has no entry.
//!
//! The process-wide table is initialised once, either explicitly through
//! [`install_compatibility_table`] at start-up or lazily with the built-in table,
//! and is read-only afterwards.

use crate::advisor::error::{AdvisorError, AdvisorResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Built-in compatibility relations, keyed by source type
const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    (
        "Multi-Profile Hospital",
        &["City Hospital", "Emergency Hospital", "Rehabilitation Center"],
    ),
    ("City Hospital", &["Multi-Profile Hospital", "Emergency Hospital", "Private Clinic"]),
    ("Emergency Hospital", &["Multi-Profile Hospital", "City Hospital"]),
    ("Children's Hospital", &["Multi-Profile Hospital"]),
    ("Maternity Hospital", &["Perinatal Center"]),
    ("Infectious Disease Hospital", &[]),
];

static INSTALLED_TABLE: OnceLock<CompatibilityTable> = OnceLock::new();

/// Mapping from a facility type to the facility types it is compatible with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityTable {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl CompatibilityTable {
    /// Create an empty table (only identical types are compatible)
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table shipped with the advisor
    pub fn builtin() -> Self {
        BUILTIN_ENTRIES
            .iter()
            .fold(Self::new(), |table, (source, targets)| table.with_entry(*source, targets.iter().copied()))
    }

    /// Add (or extend) the entry for a source type
    pub fn with_entry<I, S>(mut self, source: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(source.into())
            .or_default()
            .extend(targets.into_iter().map(Into::into));
        self
    }

    /// Parse a table from a JSON object of `type -> [types]`
    pub fn from_json_str(content: &str) -> AdvisorResult<Self> {
        serde_json::from_str(content).map_err(|e| {
            AdvisorError::compatibility_table_error(format!("Invalid compatibility table: {}", e))
        })
    }

    /// Load a table from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AdvisorResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AdvisorError::compatibility_table_error(format!(
                "Compatibility table not found: {}",
                path.display()
            )));
        }

        let table = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!("Loaded {} compatibility entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// Whether patients of `source_type` may be redirected to `target_type`
    ///
    /// Identical types are always compatible. Otherwise the source entry decides;
    /// only when the source type has no entry is the target's entry consulted in
    /// reverse. Types unknown in both directions are incompatible.
    pub fn is_compatible(&self, source_type: &str, target_type: &str) -> bool {
        if source_type == target_type {
            return true;
        }

        if let Some(targets) = self.entries.get(source_type) {
            return targets.contains(target_type);
        }

        if let Some(sources) = self.entries.get(target_type) {
            return sources.contains(source_type);
        }

        debug!("No compatibility entry for {} / {}", source_type, target_type);
        false
    }

    /// Number of source entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every facility type mentioned in the table, as key or as target
    pub fn facility_types(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|(source, targets)| {
                std::iter::once(source.as_str()).chain(targets.iter().map(String::as_str))
            })
            .collect()
    }
}

/// Install the process-wide table; must happen before the first lookup
pub fn install_compatibility_table(table: CompatibilityTable) -> AdvisorResult<&'static CompatibilityTable> {
    INSTALLED_TABLE.set(table).map_err(|_| {
        AdvisorError::compatibility_table_error("Compatibility table is already initialised")
    })?;
    Ok(compatibility_table())
}

/// The process-wide table (the built-in one unless another was installed)
pub fn compatibility_table() -> &'static CompatibilityTable {
    INSTALLED_TABLE.get_or_init(CompatibilityTable::builtin)
}

/// Check compatibility against the process-wide table
pub fn is_compatible_facility_type(source_type: &str, target_type: &str) -> bool {
    compatibility_table().is_compatible(source_type, target_type)
}
