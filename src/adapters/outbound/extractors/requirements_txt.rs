use super::{has_file_name, read_manifest};
use crate::inventory::domain::{Ecosystem, FilePosition, PackageRecord};
use crate::inventory::policies::PinnedVersionPolicy;
use crate::inventory::services::{find_name_position, find_version_position, Deduplicator, SourceText};
use crate::ports::outbound::{DepFile, DiagnosticSink, LockfileExtractor};
use crate::shared::error::ExtractionError;
use std::path::Path;

const PRODUCTION_FILE: &str = "requirements.txt";
const DEV_FILES: &[&str] = &["requirements-dev.txt", "dev-requirements.txt"];

/// Extractor for pip requirement files
///
/// One record per requirement line. Includes (`-r`), editables (`-e`),
/// options, direct URL references and local paths are ignored.
pub struct RequirementsTxtExtractor;

/// A requirement line split into its parts
#[derive(Debug, PartialEq, Eq)]
struct Requirement<'a> {
    name: &'a str,
    specifier: &'a str,
    /// Character offset of the requirement within the line
    offset: usize,
    /// Requirement length in characters, without comments or continuation
    length: usize,
    /// Length of the name and specifier alone, before any environment marker
    clause_length: usize,
}

impl LockfileExtractor for RequirementsTxtExtractor {
    fn format(&self) -> &'static str {
        "requirements.txt"
    }

    fn should_extract(&self, path: &Path) -> bool {
        has_file_name(path, PRODUCTION_FILE) || DEV_FILES.iter().any(|name| has_file_name(path, name))
    }

    fn extract(
        &self,
        file: Box<dyn DepFile>,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<Vec<PackageRecord>, ExtractionError> {
        let is_dev = DEV_FILES.iter().any(|name| has_file_name(file.path(), name));
        let (path, content) = read_manifest(file)?;
        let source = SourceText::new(&content);
        let mut packages = Vec::new();

        for line_number in 1..=source.line_count() as i64 {
            let Some(requirement) = source.line(line_number).and_then(parse_requirement) else {
                continue;
            };

            let column_start = requirement.offset as i64 + 1;
            let clause = (column_start, column_start + requirement.clause_length as i64);

            let pinned = PinnedVersionPolicy::pinned_version(requirement.specifier);
            let version_location = pinned.as_deref().and_then(|version| {
                find_version_position(&source, version, line_number, clause, &path)
            });
            let version = pinned.unwrap_or_else(|| {
                PinnedVersionPolicy::normalize(requirement.name, requirement.specifier, diagnostics)
            });

            let mut record = PackageRecord::new(requirement.name, version, Ecosystem::PyPI)
                .with_block_location(FilePosition::new(
                    line_number,
                    line_number,
                    column_start,
                    column_start + requirement.length as i64,
                    path.as_str(),
                ))
                .with_name_location(find_name_position(
                    &source,
                    requirement.name,
                    line_number,
                    clause,
                    &path,
                ))
                .with_version_location(version_location);
            if is_dev {
                record = record.with_dep_group("dev");
            }
            packages.push(record);
        }

        Ok(Deduplicator::deduplicate(packages))
    }
}

/// Parses one line; `None` for blanks, comments, options and non-registry references
fn parse_requirement(line: &str) -> Option<Requirement<'_>> {
    let without_comment = match line.find('#') {
        Some(0) => return None,
        Some(i) if line[..i].ends_with(char::is_whitespace) => &line[..i],
        _ => line,
    };
    let without_continuation = without_comment.trim_end().trim_end_matches('\\');
    let text = without_continuation.trim();

    if text.is_empty()
        || text.starts_with('-')
        || text.starts_with('.')
        || text.starts_with('/')
        || text.contains("://")
    {
        return None;
    }

    let requirement = text.split(';').next().unwrap_or_default().trim_end();
    let name_end = requirement
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(requirement.len());
    let name = &requirement[..name_end];
    if name.is_empty() {
        return None;
    }

    let mut rest = requirement[name_end..].trim_start();
    if rest.starts_with('[') {
        rest = rest.find(']').map(|i| rest[i + 1..].trim_start())?;
    }
    if rest.starts_with('@') {
        return None;
    }

    let leading = line.chars().count() - line.trim_start().chars().count();
    Some(Requirement {
        name,
        specifier: rest.trim_start_matches('(').trim_end_matches(')'),
        offset: leading,
        length: text.trim_end_matches('\\').trim_end().chars().count(),
        clause_length: requirement.chars().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::InMemoryFile;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        warnings: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }

        fn debug(&self, _message: &str) {}
    }

    fn extract_from(path: &str, content: &str, sink: &RecordingSink) -> Vec<PackageRecord> {
        RequirementsTxtExtractor
            .extract(Box::new(InMemoryFile::new(path, content)), sink)
            .unwrap()
    }

    #[test]
    fn test_should_extract() {
        let extractor = RequirementsTxtExtractor;
        assert!(extractor.should_extract(Path::new("requirements.txt")));
        assert!(extractor.should_extract(Path::new("app/requirements-dev.txt")));
        assert!(extractor.should_extract(Path::new("dev-requirements.txt")));
        assert!(!extractor.should_extract(Path::new("requirements.in")));
        assert!(!extractor.should_extract(Path::new("requirements.txt/other")));
    }

    #[test]
    fn test_parse_requirement() {
        assert_eq!(
            parse_requirement("flask==2.0.1"),
            Some(Requirement {
                name: "flask",
                specifier: "==2.0.1",
                offset: 0,
                length: 12,
                clause_length: 12,
            })
        );
        assert_eq!(
            parse_requirement("  requests[security] >= 2.8 ; python_version < '3.8'  # pinned"),
            Some(Requirement {
                name: "requests",
                specifier: ">= 2.8",
                offset: 2,
                length: 50,
                clause_length: 25,
            })
        );
        assert_eq!(parse_requirement("# comment"), None);
        assert_eq!(parse_requirement(""), None);
        assert_eq!(parse_requirement("-r base.txt"), None);
        assert_eq!(parse_requirement("-e ."), None);
        assert_eq!(parse_requirement("--index-url https://example.com"), None);
        assert_eq!(parse_requirement("    --hash=sha256:abc"), None);
        assert_eq!(parse_requirement("./local/pkg"), None);
        assert_eq!(parse_requirement("https://example.com/pkg.whl"), None);
        assert_eq!(parse_requirement("pkg @ https://example.com/pkg.whl"), None);
    }

    #[test]
    fn test_pinned_requirement_with_locations() {
        let sink = RecordingSink::default();
        let records = extract_from("requirements.txt", "# deps\nFlask==2.0.1 \\\n    --hash=sha256:abc\n", &sink);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!((record.name.as_str(), record.version.as_str()), ("Flask", "2.0.1"));
        assert!(record.dep_groups.is_empty());
        assert_eq!(record.block_location, FilePosition::new(2, 2, 1, 13, "requirements.txt"));
        assert_eq!(record.name_location, Some(FilePosition::new(2, 2, 1, 6, "requirements.txt")));
        assert_eq!(record.version_location, Some(FilePosition::new(2, 2, 8, 13, "requirements.txt")));
        assert!(sink.warnings.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unpinned_requirement_defaults_with_one_warning() {
        let sink = RecordingSink::default();
        let records = extract_from("requirements.txt", "django>=4.0\n", &sink);

        assert_eq!(records[0].version, "0.0.0");
        assert!(records[0].version_location.is_none());
        assert_eq!(sink.warnings.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_version_location_skips_environment_marker() {
        let records = extract_from(
            "requirements.txt",
            "importlib-metadata==3.8 ; python_version < \"3.8\"\n",
            &RecordingSink::default(),
        );

        assert_eq!(records[0].version, "3.8");
        assert_eq!(records[0].block_location.column.end, 49);
        assert_eq!(
            records[0].version_location,
            Some(FilePosition::new(1, 1, 21, 24, "requirements.txt"))
        );
    }

    #[test]
    fn test_version_location_stays_inside_block_with_comment() {
        let records = extract_from(
            "requirements.txt",
            "six==1.16.0  # bumped from 1.16.0rc1\n",
            &RecordingSink::default(),
        );

        let record = &records[0];
        assert_eq!(record.block_location, FilePosition::new(1, 1, 1, 12, "requirements.txt"));
        assert_eq!(record.version_location, Some(FilePosition::new(1, 1, 6, 12, "requirements.txt")));
    }

    #[test]
    fn test_wildcard_pin() {
        let records = extract_from("requirements.txt", "numpy==1.26.*\n", &RecordingSink::default());
        assert_eq!(records[0].version, "1.26");
    }

    #[test]
    fn test_dev_file_sets_group() {
        let records = extract_from("requirements-dev.txt", "pytest==8.0.0\n", &RecordingSink::default());
        assert_eq!(records[0].dep_groups, vec!["dev".to_string()]);
    }

    #[test]
    fn test_repeated_requirement_keeps_last_line() {
        let records = extract_from("requirements.txt", "six==1.16.0\nsix==1.16.0\n", &RecordingSink::default());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].block_location.line.start, 2);
    }
}
