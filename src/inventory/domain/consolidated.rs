use super::{Ecosystem, FilePosition};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// A span in a named manifest, flattened for output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageLocation {
    pub filename: String,
    pub line_start: i64,
    pub line_end: i64,
    pub column_start: i64,
    pub column_end: i64,
}

impl PackageLocation {
    /// Flattens a position, attributing it to `filename`
    pub fn from_position(filename: &str, position: &FilePosition) -> Self {
        Self {
            filename: filename.to_string(),
            line_start: position.line.start,
            line_end: position.line.end,
            column_start: position.column.start,
            column_end: position.column.end,
        }
    }

    /// Like [`PackageLocation::from_position`] but drops unknown positions
    pub fn from_optional(filename: &str, position: Option<&FilePosition>) -> Option<Self> {
        position
            .filter(|p| p.is_valid())
            .map(|p| Self::from_position(filename, p))
    }
}

/// Where one declaration of a consolidated package lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageLocations {
    pub block: PackageLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PackageLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<PackageLocation>,
}

/// One entry of the inventory, keyed by canonical identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsolidatedPackage {
    pub name: String,
    pub version: String,
    pub ecosystem: Ecosystem,
    pub locations: Vec<PackageLocations>,
}

impl ConsolidatedPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>, ecosystem: Ecosystem) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ecosystem,
            locations: Vec::new(),
        }
    }

    /// True when a location with the same block span is already recorded
    pub fn has_block(&self, block: &PackageLocation) -> bool {
        self.locations.iter().any(|l| &l.block == block)
    }
}

/// Identity → package map that iterates in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<(String, ConsolidatedPackage)>,
    index: HashMap<String, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.index.contains_key(identity)
    }

    pub fn get(&self, identity: &str) -> Option<&ConsolidatedPackage> {
        self.index.get(identity).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, identity: &str) -> Option<&mut ConsolidatedPackage> {
        match self.index.get(identity) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Inserts a new entry; an existing identity is left untouched
    ///
    /// Returns true when the entry was inserted.
    pub fn insert(&mut self, identity: String, package: ConsolidatedPackage) -> bool {
        if self.index.contains_key(&identity) {
            return false;
        }
        self.index.insert(identity.clone(), self.entries.len());
        self.entries.push((identity, package));
        true
    }

    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(identity, _)| identity.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConsolidatedPackage)> {
        self.entries.iter().map(|(identity, pkg)| (identity.as_str(), pkg))
    }

    /// Total number of locations across all packages
    pub fn location_count(&self) -> usize {
        self.entries.iter().map(|(_, p)| p.locations.len()).sum()
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (identity, package) in &self.entries {
            map.serialize_entry(identity, package)?;
        }
        map.end()
    }
}
