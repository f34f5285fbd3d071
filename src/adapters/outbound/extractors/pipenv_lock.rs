use super::json_spans::{parse_document, SpannedKind, SpannedMember};
use super::{has_file_name, read_manifest};
use crate::inventory::domain::{Ecosystem, FilePosition, PackageRecord};
use crate::inventory::services::{Deduplicator, SourceText};
use crate::ports::outbound::{DepFile, DiagnosticSink, LockfileExtractor};
use crate::shared::error::ExtractionError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PipenvLock {
    #[serde(default)]
    default: Option<HashMap<String, PipenvPackage>>,
    #[serde(default)]
    develop: Option<HashMap<String, PipenvPackage>>,
}

#[derive(Debug, Deserialize)]
struct PipenvPackage {
    #[serde(default)]
    version: Option<String>,
}

/// Extractor for `Pipfile.lock`
///
/// Reads the `default` section, then `develop` (tagged with the `dev`
/// group). A `develop` entry whose name and version were already locked in
/// `default` is not reported twice.
pub struct PipenvLockExtractor;

impl LockfileExtractor for PipenvLockExtractor {
    fn format(&self) -> &'static str {
        "Pipfile.lock"
    }

    fn should_extract(&self, path: &Path) -> bool {
        has_file_name(path, "Pipfile.lock")
    }

    fn extract(
        &self,
        file: Box<dyn DepFile>,
        _diagnostics: &dyn DiagnosticSink,
    ) -> Result<Vec<PackageRecord>, ExtractionError> {
        let (path, content) = read_manifest(file)?;
        let lock: PipenvLock =
            serde_json::from_str(&content).map_err(|e| ExtractionError::json(&path, e))?;
        let document = parse_document(&content).map_err(|e| ExtractionError::json(&path, e))?;
        let source = SourceText::new(&content);

        let mut packages = Vec::new();
        let mut seen = HashSet::new();

        let sections = [
            ("default", lock.default.as_ref(), None),
            ("develop", lock.develop.as_ref(), Some("dev")),
        ];

        for (section, locked, group) in sections {
            let (Some(locked), Some(spans)) = (locked, document.member(section)) else {
                continue;
            };

            for member in spans.value.members() {
                let Some(version) = locked
                    .get(&member.key)
                    .and_then(|p| p.version.as_deref())
                    .map(|v| v.trim_start_matches('='))
                    .filter(|v| !v.is_empty())
                else {
                    continue;
                };

                if !seen.insert(format!("{}@{}", member.key, version)) {
                    continue;
                }

                let mut record = Self::located_record(member, version, &source, &path);
                if let Some(group) = group {
                    record = record.with_dep_group(group);
                }
                packages.push(record);
            }
        }

        Ok(Deduplicator::deduplicate(packages))
    }
}

impl PipenvLockExtractor {
    /// Block spans from the key's opening quote to one past the closing brace
    fn located_record(
        member: &SpannedMember,
        version: &str,
        source: &SourceText<'_>,
        path: &str,
    ) -> PackageRecord {
        let (key_line, key_column) = source.line_column(member.key_start);
        let (end_line, end_column) = source.line_column(member.value.end.saturating_sub(1));
        let name_length = member.key.chars().count() as i64;

        let version_location = member.value.member("version").and_then(|v| match v.value.kind {
            SpannedKind::String {
                body_start,
                body_end,
            } => {
                let (line, column) = source.line_column(body_start);
                let length = source.text()[body_start..body_end].chars().count() as i64;
                Some(FilePosition::new(line, line, column, column + length, path))
            }
            _ => None,
        });

        PackageRecord::new(member.key.clone(), version, Ecosystem::PyPI)
            .with_block_location(FilePosition::new(
                key_line,
                end_line,
                key_column,
                end_column + 1,
                path,
            ))
            .with_name_location(Some(FilePosition::new(
                key_line,
                key_line,
                key_column + 1,
                key_column + 1 + name_length,
                path,
            )))
            .with_version_location(version_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::InMemoryFile;

    struct NullSink;

    impl DiagnosticSink for NullSink {
        fn warn(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    fn extract(content: &str) -> Result<Vec<PackageRecord>, ExtractionError> {
        PipenvLockExtractor.extract(Box::new(InMemoryFile::new("Pipfile.lock", content)), &NullSink)
    }

    const TWO_PACKAGES: &str = r#"{
  "_meta": {},
  "default": {
    "itsdangerous": {
      "hashes": [],
      "version": "==2.1.2"
    }
  },
  "develop": {
    "markupsafe": {
      "version": "==2.1.1"
    }
  }
}
"#;

    #[test]
    fn test_should_extract() {
        assert!(PipenvLockExtractor.should_extract(Path::new("Pipfile.lock")));
        assert!(PipenvLockExtractor.should_extract(Path::new("path/to/my/Pipfile.lock")));
        assert!(!PipenvLockExtractor.should_extract(Path::new("")));
        assert!(!PipenvLockExtractor.should_extract(Path::new("path/to/my/Pipfile.lock/file")));
        assert!(!PipenvLockExtractor.should_extract(Path::new("path/to/my/Pipfile.lock.file")));
        assert!(!PipenvLockExtractor.should_extract(Path::new("path.to.my.Pipfile.lock")));
    }

    #[test]
    fn test_invalid_json() {
        let err = extract("this is not json").unwrap_err();
        assert!(err.to_string().starts_with("could not decode json from Pipfile.lock"));
    }

    #[test]
    fn test_no_packages() {
        assert!(extract("{}").unwrap().is_empty());
        assert!(extract(r#"{"default": {}, "develop": null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_two_packages_with_spans() {
        let records = extract(TWO_PACKAGES).unwrap();
        assert_eq!(records.len(), 2);

        let default = &records[0];
        assert_eq!(default.name, "itsdangerous");
        assert_eq!(default.version, "2.1.2");
        assert!(default.dep_groups.is_empty());
        assert_eq!(default.block_location, FilePosition::new(4, 7, 5, 6, "Pipfile.lock"));
        assert_eq!(default.name_location, Some(FilePosition::new(4, 4, 6, 18, "Pipfile.lock")));
        assert_eq!(default.version_location, Some(FilePosition::new(6, 6, 19, 26, "Pipfile.lock")));

        let develop = &records[1];
        assert_eq!(develop.name, "markupsafe");
        assert_eq!(develop.dep_groups, vec!["dev".to_string()]);
        assert_eq!(develop.block_location, FilePosition::new(10, 12, 5, 6, "Pipfile.lock"));
    }

    #[test]
    fn test_develop_duplicate_of_default_is_skipped() {
        let content = r#"{
  "default": { "pluggy": { "version": "==1.0.0" } },
  "develop": { "pluggy": { "version": "==1.0.0" }, "pytest": { "version": "==7.0.0" } }
}"#;
        let records = extract(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "pluggy");
        assert!(records[0].dep_groups.is_empty());
        assert_eq!(records[1].name, "pytest");
    }

    #[test]
    fn test_same_name_different_versions_are_kept() {
        let content = r#"{
  "default": { "pluggy": { "version": "==1.0.1" } },
  "develop": { "pluggy": { "version": "==1.0.0" } }
}"#;
        let records = extract(content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].version, "1.0.0");
        assert_eq!(records[1].dep_groups, vec!["dev".to_string()]);
    }

    #[test]
    fn test_package_without_version_is_skipped() {
        let content = r#"{"default": {"editable-pkg": {"editable": true, "path": "."}}}"#;
        assert!(extract(content).unwrap().is_empty());
    }
}
