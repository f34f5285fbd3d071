mod deduplicator;
pub mod location_finder;
mod metadata_generator;
mod package_grouper;

pub use deduplicator::Deduplicator;
pub use location_finder::{find_name_position, find_version_position, SourceText};
pub use metadata_generator::MetadataGenerator;
pub use package_grouper::PackageGrouper;
