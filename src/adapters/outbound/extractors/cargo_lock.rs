use super::toml_packages::extract_package_tables;
use super::{has_file_name, read_manifest};
use crate::inventory::domain::{Ecosystem, PackageRecord};
use crate::inventory::services::Deduplicator;
use crate::ports::outbound::{DepFile, DiagnosticSink, LockfileExtractor};
use crate::shared::error::ExtractionError;
use std::path::Path;

/// Extractor for Cargo lockfiles (`Cargo.lock`)
pub struct CargoLockExtractor;

impl LockfileExtractor for CargoLockExtractor {
    fn format(&self) -> &'static str {
        "Cargo.lock"
    }

    fn should_extract(&self, path: &Path) -> bool {
        has_file_name(path, "Cargo.lock")
    }

    fn extract(
        &self,
        file: Box<dyn DepFile>,
        _diagnostics: &dyn DiagnosticSink,
    ) -> Result<Vec<PackageRecord>, ExtractionError> {
        let (path, content) = read_manifest(file)?;
        let records = extract_package_tables(&path, &content, Ecosystem::CratesIo)?;
        Ok(Deduplicator::deduplicate(records))
    }
}
