use lockfile_inventory::prelude::*;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving manifests from memory
#[derive(Default)]
pub struct MockManifestReader {
    files: HashMap<PathBuf, String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn open(&self, path: &Path) -> std::result::Result<Box<dyn DepFile>, ExtractionError> {
        match self.files.get(path) {
            Some(content) => Ok(Box::new(InMemoryFile::new(path, content.clone()))),
            None => Err(ExtractionError::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )),
        }
    }
}
