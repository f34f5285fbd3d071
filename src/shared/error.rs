use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every manifest was extracted (or skips are tolerated)
    Success = 0,
    /// At least one manifest was skipped while running in strict mode
    ManifestsSkipped = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, output write error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ManifestsSkipped => write!(f, "Manifests Skipped (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors produced while extracting packages from a single manifest.
///
/// None of these abort a run: the manifest is skipped and the remaining
/// manifests are still consolidated.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The manifest could not be read. The underlying error is kept intact.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest content does not match the expected grammar.
    #[error("{details}")]
    Parse { path: PathBuf, details: String },

    /// Extraction of the whole manifest exceeded its time budget.
    #[error("extraction of {path} timed out after {seconds}s")]
    Timeout { path: PathBuf, seconds: u64 },

    /// No registered extractor recognises the manifest.
    #[error("no extractor registered for {path}")]
    NoExtractor { path: PathBuf },
}

impl ExtractionError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Generic decode failure: "could not extract from <path>: <cause>"
    pub fn parse(path: impl Into<PathBuf>, cause: impl fmt::Display) -> Self {
        let path = path.into();
        Self::Parse {
            details: format!("could not extract from {}: {}", path.display(), cause),
            path,
        }
    }

    /// JSON decode failure: "could not decode json from <path>: <cause>"
    pub fn json(path: impl Into<PathBuf>, cause: impl fmt::Display) -> Self {
        let path = path.into();
        Self::Parse {
            details: format!("could not decode json from {}: {}", path.display(), cause),
            path,
        }
    }

    /// Path of the manifest this error belongs to
    pub fn path(&self) -> &PathBuf {
        match self {
            ExtractionError::Io { path, .. }
            | ExtractionError::Parse { path, .. }
            | ExtractionError::Timeout { path, .. }
            | ExtractionError::NoExtractor { path } => path,
        }
    }
}

/// Application-specific errors for inventory generation.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("No manifest paths were given\n\n💡 Hint: Pass one or more lockfiles, e.g. `lockfile-inventory go.mod Pipfile.lock`")]
    NoManifests,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
