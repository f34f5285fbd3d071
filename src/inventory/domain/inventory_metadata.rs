use serde::Serialize;

/// InventoryMetadata value object describing one extraction run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
}

impl InventoryMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, run_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_metadata_serializes_camel_case() {
        let metadata = InventoryMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "lockfile-inventory".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:12345".to_string(),
        );

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["toolName"], "lockfile-inventory");
        assert_eq!(value["runId"], "urn:uuid:12345");
        assert_eq!(metadata.tool_version(), "0.1.0");
    }
}
