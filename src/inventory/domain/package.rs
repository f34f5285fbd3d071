use super::FilePosition;
use serde::{Serialize, Serializer};
use std::fmt;

/// Package manager namespace a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ecosystem {
    Go,
    PyPI,
    CratesIo,
}

impl Ecosystem {
    /// Ecosystem name as used by vulnerability databases
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Go => "Go",
            Ecosystem::PyPI => "PyPI",
            Ecosystem::CratesIo => "crates.io",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Ecosystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One dependency declaration found in one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub ecosystem: Ecosystem,
    /// Version comparison scheme; may differ from `ecosystem`
    pub compare_as: Ecosystem,
    /// Empty means the default (production) group
    pub dep_groups: Vec<String>,
    pub block_location: FilePosition,
    pub name_location: Option<FilePosition>,
    pub version_location: Option<FilePosition>,
}

impl PackageRecord {
    /// Creates a record with no groups and unknown locations
    pub fn new(name: impl Into<String>, version: impl Into<String>, ecosystem: Ecosystem) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ecosystem,
            compare_as: ecosystem,
            dep_groups: Vec::new(),
            block_location: FilePosition::default(),
            name_location: None,
            version_location: None,
        }
    }

    pub fn with_block_location(mut self, block_location: FilePosition) -> Self {
        self.block_location = block_location;
        self
    }

    /// Attaches a name span; invalid spans are dropped
    pub fn with_name_location(mut self, name_location: Option<FilePosition>) -> Self {
        self.name_location = name_location.and_then(FilePosition::into_valid);
        self
    }

    /// Attaches a version span; invalid spans are dropped
    pub fn with_version_location(mut self, version_location: Option<FilePosition>) -> Self {
        self.version_location = version_location.and_then(FilePosition::into_valid);
        self
    }

    pub fn with_dep_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        if !self.dep_groups.contains(&group) {
            self.dep_groups.push(group);
        }
        self
    }

    /// Key used for single-file deduplication
    pub fn dedup_key(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}
