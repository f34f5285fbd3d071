mod extractor_registry_factory;
mod formatter_factory;
mod presenter_factory;

pub use extractor_registry_factory::ExtractorRegistryFactory;
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
