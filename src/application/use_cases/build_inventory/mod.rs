use crate::application::dto::{InventoryRequest, InventoryResponse, SkippedManifest};
use crate::application::registry::ExtractorRegistry;
use crate::inventory::domain::{ManifestSource, PackageRecord};
use crate::inventory::services::{MetadataGenerator, PackageGrouper};
use crate::ports::outbound::{DiagnosticSink, ManifestReader, PackageIdentifier, ProgressReporter};
use crate::shared::error::{ExtractionError, InventoryError};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

type ExtractionOutcome = (PathBuf, std::result::Result<Vec<PackageRecord>, ExtractionError>);

/// BuildInventoryUseCase - extracts every given manifest and consolidates
/// the results into one inventory
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `DS` - DiagnosticSink implementation
/// * `PI` - PackageIdentifier implementation
/// * `PR` - ProgressReporter implementation
///
/// Extraction of distinct manifests runs on blocking tasks, at most
/// `max_parallel` at a time. Results are merged in path order regardless of
/// which extraction finished first.
pub struct BuildInventoryUseCase<MR, DS, PI, PR> {
    registry: Arc<ExtractorRegistry>,
    manifest_reader: Arc<MR>,
    diagnostics: Arc<DS>,
    identifier: PI,
    progress_reporter: PR,
}

impl<MR, DS, PI, PR> BuildInventoryUseCase<MR, DS, PI, PR>
where
    MR: ManifestReader + 'static,
    DS: DiagnosticSink + 'static,
    PI: PackageIdentifier,
    PR: ProgressReporter,
{
    /// Creates a new BuildInventoryUseCase with injected dependencies
    pub fn new(
        registry: Arc<ExtractorRegistry>,
        manifest_reader: Arc<MR>,
        diagnostics: Arc<DS>,
        identifier: PI,
        progress_reporter: PR,
    ) -> Self {
        Self {
            registry,
            manifest_reader,
            diagnostics,
            identifier,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// A manifest that cannot be opened, matched, parsed or extracted in time
    /// is reported and listed in `skipped`; it never fails the run.
    ///
    /// # Errors
    /// Returns `InventoryError::NoManifests` when the request holds no paths.
    pub async fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        let mut paths = request.manifest_paths;
        if paths.is_empty() {
            return Err(InventoryError::NoManifests.into());
        }
        paths.sort();
        paths.dedup();

        let total = paths.len();
        self.progress_reporter
            .report(&format!("📖 Extracting {} manifest(s)...", total));

        let timeout = request.timeout;
        let mut outcomes = stream::iter(paths.into_iter().map(|path| self.extract_one(path, timeout)))
            .buffered(request.max_parallel.max(1));

        let mut sources = Vec::new();
        let mut skipped = Vec::new();
        let mut processed = 0;
        while let Some((path, outcome)) = outcomes.next().await {
            processed += 1;
            let label = path.display().to_string();
            self.progress_reporter
                .report_progress(processed, total, Some(&label));

            match outcome {
                Ok(records) => {
                    tracing::debug!(manifest = %label, records = records.len(), "extracted manifest");
                    sources.push(ManifestSource::new(label, records));
                }
                Err(error) => {
                    self.progress_reporter
                        .report_warning(&format!("Skipping {}: {}", label, error));
                    skipped.push(SkippedManifest::new(path, error.to_string()));
                }
            }
        }

        let inventory = PackageGrouper::new(&self.identifier, self.diagnostics.as_ref()).group(&sources);
        tracing::debug!(
            packages = inventory.len(),
            locations = inventory.location_count(),
            "grouped manifests"
        );

        self.progress_reporter.report_completion(&format!(
            "Inventory built: {} package(s) from {} manifest(s), {} skipped",
            inventory.len(),
            sources.len(),
            skipped.len()
        ));

        Ok(InventoryResponse::new(
            inventory,
            skipped,
            sources.len(),
            MetadataGenerator::generate_default_metadata(),
        ))
    }

    /// Dispatches, opens and extracts one manifest within `timeout`
    ///
    /// An expired extraction keeps running on its blocking thread but its
    /// result is discarded.
    async fn extract_one(&self, path: PathBuf, timeout: Duration) -> ExtractionOutcome {
        let registry = Arc::clone(&self.registry);
        let reader = Arc::clone(&self.manifest_reader);
        let diagnostics = Arc::clone(&self.diagnostics);
        let task_path = path.clone();

        let task = tokio::task::spawn_blocking(move || {
            let extractor = registry
                .find(&task_path)
                .ok_or_else(|| ExtractionError::NoExtractor {
                    path: task_path.clone(),
                })?;
            tracing::debug!(manifest = %task_path.display(), format = extractor.format(), "dispatching");
            let file = reader.open(&task_path)?;
            extractor.extract(file, diagnostics.as_ref())
        });

        let outcome = match tokio::time::timeout(timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(ExtractionError::parse(&path, join_error)),
            Err(_) => Err(ExtractionError::Timeout {
                path: path.clone(),
                seconds: timeout.as_secs(),
            }),
        };
        (path, outcome)
    }
}

#[cfg(test)]
mod tests;
