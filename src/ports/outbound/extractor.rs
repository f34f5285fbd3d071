use crate::inventory::domain::PackageRecord;
use crate::ports::outbound::{DepFile, DiagnosticSink};
use crate::shared::error::ExtractionError;
use std::path::Path;

/// LockfileExtractor port - one implementation per manifest format
///
/// Implementations hold no mutable state, so a single instance can serve
/// concurrent extractions of different manifests.
pub trait LockfileExtractor: Send + Sync {
    /// Stable identifier of the handled format (e.g. "go.mod")
    fn format(&self) -> &'static str;

    /// Decides from the path shape alone whether this extractor handles it
    ///
    /// Must not touch the filesystem.
    fn should_extract(&self, path: &Path) -> bool;

    /// Reads the whole manifest and returns its deduplicated package records
    ///
    /// # Errors
    /// - `ExtractionError::Io` when reading fails (the `io::Error` is kept)
    /// - `ExtractionError::Parse` when the content cannot be decoded
    fn extract(
        &self,
        file: Box<dyn DepFile>,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<Vec<PackageRecord>, ExtractionError>;
}
