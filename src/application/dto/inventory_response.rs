use crate::inventory::domain::{Inventory, InventoryMetadata};
use serde::Serialize;
use std::path::PathBuf;

/// A manifest left out of the inventory, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedManifest {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedManifest {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// InventoryResponse - output of the build-inventory use case
#[derive(Debug, Clone)]
pub struct InventoryResponse {
    /// Consolidated packages keyed by canonical identity
    pub inventory: Inventory,
    /// Manifests that were given but could not be extracted
    pub skipped: Vec<SkippedManifest>,
    /// Number of manifests that contributed to the inventory
    pub extracted_count: usize,
    pub metadata: InventoryMetadata,
}

impl InventoryResponse {
    pub fn new(
        inventory: Inventory,
        skipped: Vec<SkippedManifest>,
        extracted_count: usize,
        metadata: InventoryMetadata,
    ) -> Self {
        Self {
            inventory,
            skipped,
            extracted_count,
            metadata,
        }
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}
