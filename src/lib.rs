//! lockfile-inventory - consolidated package inventories from lockfiles
//!
//! Reads dependency manifests from several ecosystems (go.mod, Pipfile.lock,
//! uv.lock, Cargo.lock, requirements.txt), extracts every declared package
//! with the exact spans where it is declared, and merges them into one
//! inventory keyed by package URL.
//!
//! # Architecture
//!
//! - **Domain Layer** (`inventory`): records, locations, version policies,
//!   single-file deduplication and cross-file grouping
//! - **Application Layer** (`application`): extractor registry, use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): extractors, filesystem, console, identity, formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use lockfile_inventory::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! let use_case = BuildInventoryUseCase::new(
//!     Arc::new(ExtractorRegistryFactory::default_registry()?),
//!     Arc::new(FileSystemReader::new()),
//!     Arc::new(TracingDiagnosticSink::new()),
//!     PurlIdentifier::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = InventoryRequest::with_defaults(vec![
//!     PathBuf::from("go.mod"),
//!     PathBuf::from("Pipfile.lock"),
//! ]);
//! let response = use_case.execute(request).await?;
//!
//! println!("{}", JsonFormatter::new(true).format(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TracingDiagnosticSink};
    pub use crate::adapters::outbound::extractors::{
        CargoLockExtractor, GoModExtractor, PipenvLockExtractor, RequirementsTxtExtractor,
        UvLockExtractor,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::adapters::outbound::identity::PurlIdentifier;
    pub use crate::application::dto::{InventoryRequest, InventoryResponse, SkippedManifest};
    pub use crate::application::factories::ExtractorRegistryFactory;
    pub use crate::application::registry::ExtractorRegistry;
    pub use crate::application::use_cases::BuildInventoryUseCase;
    pub use crate::inventory::domain::{
        is_position_valid, ConsolidatedPackage, Ecosystem, FilePosition, Inventory,
        ManifestSource, PackageLocation, PackageLocations, PackageRecord, Position,
    };
    pub use crate::inventory::services::{Deduplicator, PackageGrouper};
    pub use crate::ports::outbound::{
        DepFile, DiagnosticSink, InMemoryFile, InventoryFormatter, LockfileExtractor,
        ManifestReader, OutputPresenter, PackageIdentifier, ProgressReporter,
    };
    pub use crate::shared::error::{ExtractionError, InventoryError};
    pub use crate::shared::Result;
}
