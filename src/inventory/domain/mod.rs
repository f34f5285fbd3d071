pub mod consolidated;
pub mod inventory_metadata;
pub mod manifest_source;
pub mod package;
pub mod position;

pub use consolidated::{ConsolidatedPackage, Inventory, PackageLocation, PackageLocations};
pub use inventory_metadata::InventoryMetadata;
pub use manifest_source::ManifestSource;
pub use package::{Ecosystem, PackageRecord};
pub use position::{is_position_valid, FilePosition, Position};
