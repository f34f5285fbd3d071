use crate::adapters::outbound::extractors::{
    CargoLockExtractor, GoModExtractor, PipenvLockExtractor, RequirementsTxtExtractor,
    UvLockExtractor,
};
use crate::application::registry::ExtractorRegistry;
use crate::shared::Result;

/// Factory for the extractor registry used by the CLI
pub struct ExtractorRegistryFactory;

impl ExtractorRegistryFactory {
    /// Registry holding every built-in extractor
    ///
    /// # Examples
    /// ```
    /// use lockfile_inventory::application::factories::ExtractorRegistryFactory;
    ///
    /// let registry = ExtractorRegistryFactory::default_registry().unwrap();
    /// assert!(registry.formats().contains(&"go.mod"));
    /// ```
    pub fn default_registry() -> Result<ExtractorRegistry> {
        ExtractorRegistry::new()
            .with(Box::new(GoModExtractor))?
            .with(Box::new(PipenvLockExtractor))?
            .with(Box::new(UvLockExtractor))?
            .with(Box::new(CargoLockExtractor))?
            .with(Box::new(RequirementsTxtExtractor))
    }
}
