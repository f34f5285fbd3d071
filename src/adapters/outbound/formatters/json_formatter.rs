use crate::application::dto::{InventoryResponse, SkippedManifest};
use crate::inventory::domain::{Inventory, InventoryMetadata};
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document<'a> {
    metadata: &'a InventoryMetadata,
    packages: &'a Inventory,
    skipped: &'a [SkippedManifest],
}

/// JsonFormatter adapter rendering the inventory as a JSON document
///
/// ```json
/// { "metadata": {...}, "packages": { "<purl>": {...} }, "skipped": [...] }
/// ```
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InventoryFormatter for JsonFormatter {
    fn format(&self, response: &InventoryResponse) -> Result<String> {
        let document = Document {
            metadata: &response.metadata,
            packages: &response.inventory,
            skipped: &response.skipped,
        };

        let mut json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{ConsolidatedPackage, Ecosystem, PackageLocation, PackageLocations};
    use serde_json::Value;

    fn response() -> InventoryResponse {
        let block = PackageLocation {
            filename: "Pipfile.lock".to_string(),
            line_start: 19,
            line_end: 64,
            column_start: 9,
            column_end: 10,
        };
        let mut package = ConsolidatedPackage::new("markupsafe", "2.1.1", Ecosystem::PyPI);
        package.locations.push(PackageLocations {
            block,
            name: None,
            version: None,
        });

        let mut inventory = Inventory::new();
        inventory.insert("pkg:pypi/markupsafe@2.1.1".to_string(), package);

        InventoryResponse::new(
            inventory,
            vec![SkippedManifest::new("broken/go.mod", "could not extract from broken/go.mod: line 1: unknown directive: x")],
            1,
            InventoryMetadata::new(
                "2024-01-01T00:00:00+00:00".to_string(),
                "lockfile-inventory".to_string(),
                "0.1.0".to_string(),
                "urn:uuid:00000000-0000-0000-0000-000000000000".to_string(),
            ),
        )
    }

    #[test]
    fn test_document_shape() {
        let output = JsonFormatter::new(false).format(&response()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["metadata"]["toolName"], "lockfile-inventory");
        let package = &value["packages"]["pkg:pypi/markupsafe@2.1.1"];
        assert_eq!(package["name"], "markupsafe");
        assert_eq!(package["ecosystem"], "PyPI");
        assert_eq!(package["locations"][0]["block"]["lineEnd"], 64);
        assert!(package["locations"][0].get("name").is_none());
        assert_eq!(value["skipped"][0]["path"], "broken/go.mod");
    }

    #[test]
    fn test_pretty_and_compact() {
        let pretty = JsonFormatter::default().format(&response()).unwrap();
        let compact = JsonFormatter::new(false).format(&response()).unwrap();

        assert!(pretty.lines().count() > 1);
        assert_eq!(compact.lines().count(), 1);
        assert!(compact.ends_with('\n'));
    }
}
