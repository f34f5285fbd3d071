/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the inventory core uses
/// to interact with manifests, identity resolution, diagnostics and output.
pub mod dep_file;
pub mod diagnostic_sink;
pub mod extractor;
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod package_identifier;
pub mod progress_reporter;

pub use dep_file::{DepFile, InMemoryFile};
pub use diagnostic_sink::DiagnosticSink;
pub use extractor::LockfileExtractor;
pub use formatter::InventoryFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use package_identifier::PackageIdentifier;
pub use progress_reporter::ProgressReporter;
