use std::path::PathBuf;
use std::time::Duration;

/// Default per-manifest extraction budget
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of manifests extracted concurrently
pub const DEFAULT_MAX_PARALLEL: usize = 8;

/// InventoryRequest - input of the build-inventory use case
///
/// Paths are taken as given; discovering manifests is the caller's job.
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    /// Manifests to extract
    pub manifest_paths: Vec<PathBuf>,
    /// Budget for extracting one whole manifest
    pub timeout: Duration,
    /// Upper bound on concurrently running extractions
    pub max_parallel: usize,
}

impl InventoryRequest {
    pub fn new(manifest_paths: Vec<PathBuf>, timeout: Duration, max_parallel: usize) -> Self {
        Self {
            manifest_paths,
            timeout,
            max_parallel,
        }
    }

    /// Request with the default timeout and parallelism
    pub fn with_defaults(manifest_paths: Vec<PathBuf>) -> Self {
        Self::new(manifest_paths, DEFAULT_TIMEOUT, DEFAULT_MAX_PARALLEL)
    }
}
