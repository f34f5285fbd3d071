/// Manifest extractors, one per supported lockfile format
mod cargo_lock;
mod go_mod;
mod go_mod_parser;
mod json_spans;
mod pipenv_lock;
mod requirements_txt;
mod toml_packages;
mod uv_lock;

pub use cargo_lock::CargoLockExtractor;
pub use go_mod::GoModExtractor;
pub use pipenv_lock::PipenvLockExtractor;
pub use requirements_txt::RequirementsTxtExtractor;
pub use uv_lock::UvLockExtractor;

use crate::ports::outbound::DepFile;
use crate::shared::error::ExtractionError;
use std::io::Read;
use std::path::Path;

/// Reads a manifest to the end, returning its path label and UTF-8 content
fn read_manifest(mut file: Box<dyn DepFile>) -> Result<(String, String), ExtractionError> {
    let path = file.path().display().to_string();
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ExtractionError::io(&path, e))?;
    let content = String::from_utf8(bytes)
        .map_err(|e| ExtractionError::parse(&path, format!("invalid UTF-8: {}", e)))?;
    Ok((path, content))
}

/// True when the last path component is exactly `name`
fn has_file_name(path: &Path, name: &str) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some(name)
}
