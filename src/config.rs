//! Configuration file support for lockfile-inventory.
//!
//! Provides YAML-based configuration through `lockfile-inventory.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::InventoryError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "lockfile-inventory.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Seconds allowed for extracting one manifest.
    pub timeout_seconds: Option<u64>,
    /// Manifests extracted concurrently.
    pub max_parallel: Option<usize>,
    /// Fail the run when a manifest is skipped.
    pub strict: Option<bool>,
    /// Indent the JSON output.
    pub pretty: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_seconds == Some(0) {
        return Err(InventoryError::InvalidConfig {
            message: "timeout_seconds must be greater than zero".to_string(),
            hint: "Remove the field to use the default of 30 seconds".to_string(),
        }
        .into());
    }
    if config.max_parallel == Some(0) {
        return Err(InventoryError::InvalidConfig {
            message: "max_parallel must be greater than zero".to_string(),
            hint: "Use 1 to extract manifests one at a time".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
