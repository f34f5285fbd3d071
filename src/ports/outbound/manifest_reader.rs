use crate::ports::outbound::DepFile;
use crate::shared::error::ExtractionError;
use std::path::Path;

/// ManifestReader port for opening manifests discovered elsewhere
///
/// The inventory core never walks directories; it is handed paths and
/// opens each one through this port.
pub trait ManifestReader: Send + Sync {
    /// Opens a manifest for reading
    ///
    /// # Errors
    /// Returns `ExtractionError::Io` if the file does not exist, is not a
    /// regular file, or fails the size and symlink checks.
    fn open(&self, path: &Path) -> Result<Box<dyn DepFile>, ExtractionError>;
}
