use crate::inventory::domain::InventoryMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service stamping an extraction run
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh run id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> InventoryMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        InventoryMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
        )
    }

    /// Metadata naming this crate and its compile-time version
    pub fn generate_default_metadata() -> InventoryMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
