use crate::ports::outbound::LockfileExtractor;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use std::path::Path;

/// The set of extractors a run dispatches to
///
/// Built once at startup and shared read-only afterwards. Entries are kept
/// sorted by format id, so `find` is deterministic whatever the registration
/// order was.
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn LockfileExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extractor
    ///
    /// # Errors
    /// Returns a validation error if an extractor with the same format id
    /// is already registered.
    pub fn register(&mut self, extractor: Box<dyn LockfileExtractor>) -> Result<()> {
        let format = extractor.format();
        match self
            .extractors
            .binary_search_by(|existing| existing.format().cmp(format))
        {
            Ok(_) => Err(InventoryError::Validation {
                message: format!("extractor for {} is already registered", format),
            }
            .into()),
            Err(index) => {
                self.extractors.insert(index, extractor);
                Ok(())
            }
        }
    }

    /// Builder-style [`ExtractorRegistry::register`]
    pub fn with(mut self, extractor: Box<dyn LockfileExtractor>) -> Result<Self> {
        self.register(extractor)?;
        Ok(self)
    }

    /// First extractor, in format order, that handles `path`
    pub fn find(&self, path: &Path) -> Option<&dyn LockfileExtractor> {
        self.extractors
            .iter()
            .find(|extractor| extractor.should_extract(path))
            .map(|extractor| extractor.as_ref())
    }

    /// Registered format ids, sorted
    pub fn formats(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.format()).collect()
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}
