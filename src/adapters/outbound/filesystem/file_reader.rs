use crate::ports::outbound::{DepFile, ManifestReader};
use crate::shared::error::ExtractionError;
use crate::shared::security::validate_manifest_file;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for opening manifests on the local disk
///
/// Every manifest is checked before it is opened:
/// - symbolic links are rejected
/// - the path must be a regular file
/// - the file must not exceed `MAX_FILE_SIZE`
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn open(&self, path: &Path) -> Result<Box<dyn DepFile>, ExtractionError> {
        validate_manifest_file(path).map_err(|e| ExtractionError::io(path, e))?;
        let file = File::open(path).map_err(|e| ExtractionError::io(path, e))?;

        Ok(Box::new(LocalFile {
            path: path.to_path_buf(),
            file,
        }))
    }
}

/// A manifest opened from the local filesystem
struct LocalFile {
    path: PathBuf,
    file: File,
}

impl Read for LocalFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl DepFile for LocalFile {
    fn path(&self) -> &Path {
        &self.path
    }
}
