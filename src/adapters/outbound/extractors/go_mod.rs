use super::go_mod_parser::{parse_statements, Statement, Token};
use super::{has_file_name, read_manifest};
use crate::inventory::domain::{Ecosystem, FilePosition, PackageRecord};
use crate::inventory::policies::GoVersionPolicy;
use crate::inventory::services::{find_name_position, find_version_position, Deduplicator, SourceText};
use crate::ports::outbound::{DepFile, DiagnosticSink, LockfileExtractor};
use crate::shared::error::ExtractionError;
use std::path::Path;

const REPLACE_USAGE: &str = "usage: replace module/path [v1.2.3] => other/module v1.4 | ../local/directory";

/// Extractor for Go module manifests (`go.mod`)
///
/// Requirements are keyed by module path and canonical version. `replace`
/// directives are applied afterwards in file order and rewrite or drop
/// requirements under their original key. The `go` directive contributes a
/// `stdlib` package without a location.
pub struct GoModExtractor;

struct Replacement {
    old_path: String,
    old_version: Option<String>,
    new_path: String,
    new_version: Option<String>,
    statement: Statement,
    /// Right-hand module path and version as written
    target: Vec<Token>,
}

/// Insertion-ordered working set keyed by `path@version`
type WorkingSet = Vec<(String, PackageRecord)>;

impl LockfileExtractor for GoModExtractor {
    fn format(&self) -> &'static str {
        "go.mod"
    }

    fn should_extract(&self, path: &Path) -> bool {
        has_file_name(path, "go.mod")
    }

    fn extract(
        &self,
        file: Box<dyn DepFile>,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<Vec<PackageRecord>, ExtractionError> {
        let (path, content) = read_manifest(file)?;
        let statements = parse_statements(&content).map_err(|e| ExtractionError::parse(&path, e))?;
        let source = SourceText::new(&content);

        let mut packages: WorkingSet = Vec::new();
        let mut replacements = Vec::new();
        let mut module_seen = false;
        let mut go_version: Option<String> = None;

        for statement in statements {
            let line = statement.line;
            let fail = |message: String| {
                ExtractionError::parse(&path, format!("line {}: {}", line, message))
            };

            match statement.verb.as_str() {
                "module" => {
                    if module_seen {
                        return Err(fail("repeated module statement".to_string()));
                    }
                    if statement.args.len() != 1 {
                        return Err(fail("usage: module module/path".to_string()));
                    }
                    module_seen = true;
                }
                "go" => {
                    if go_version.is_some() {
                        return Err(fail("repeated go statement".to_string()));
                    }
                    let [version] = statement.args.as_slice() else {
                        return Err(fail("usage: go 1.23".to_string()));
                    };
                    if !is_go_release(&version.text) {
                        return Err(fail(format!(
                            "invalid go version '{}': must match format 1.23.0",
                            version.text
                        )));
                    }
                    go_version = Some(version.text.clone());
                }
                "require" => {
                    let [module, version] = statement.args.as_slice() else {
                        return Err(fail("usage: require module/path v1.2.3".to_string()));
                    };
                    let canonical = GoVersionPolicy::normalize(&module.text, &version.text, diagnostics);
                    let key = format!("{}@{}", module.text, canonical);
                    let record = Self::located_record(
                        &module.text,
                        &canonical,
                        &statement,
                        (module, Some(version)),
                        &source,
                        &path,
                    );
                    upsert(&mut packages, key, record);
                }
                "replace" => {
                    let replacement = Self::parse_replace(statement, diagnostics)
                        .map_err(|(line, message)| {
                            ExtractionError::parse(&path, format!("line {}: {}", line, message))
                        })?;
                    replacements.push(replacement);
                }
                "toolchain" if statement.args.len() != 1 => {
                    return Err(fail("usage: toolchain go1.21.0".to_string()));
                }
                "exclude" if statement.args.len() != 2 => {
                    return Err(fail("usage: exclude module/path v1.2.3".to_string()));
                }
                "retract" if statement.args.is_empty() => {
                    return Err(fail("usage: retract version | [low, high]".to_string()));
                }
                "godebug" if statement.args.len() != 1 || !statement.args[0].text.contains('=') => {
                    return Err(fail("usage: godebug key=value".to_string()));
                }
                _ => {}
            }
        }

        for replacement in &replacements {
            Self::apply_replace(&mut packages, replacement, &source, &path);
        }

        if let Some(version) = go_version {
            upsert(
                &mut packages,
                "stdlib".to_string(),
                PackageRecord::new("stdlib", pad_go_release(&version), Ecosystem::Go),
            );
        }

        Ok(Deduplicator::deduplicate(
            packages.into_iter().map(|(_, record)| record).collect(),
        ))
    }
}

impl GoModExtractor {
    fn parse_replace(
        statement: Statement,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<Replacement, (i64, String)> {
        let args = &statement.args;
        let arrow = match args.iter().position(|t| t.is_arrow()) {
            Some(i @ (1 | 2)) => i,
            _ => return Err((statement.line, REPLACE_USAGE.to_string())),
        };
        let target = args[arrow + 1..].to_vec();
        if target.is_empty() || target.len() > 2 {
            return Err((statement.line, REPLACE_USAGE.to_string()));
        }

        let old_path = args[0].text.clone();
        let old_version = (arrow == 2)
            .then(|| GoVersionPolicy::normalize(&old_path, &args[1].text, diagnostics));
        let new_path = target[0].text.clone();
        let new_version = target
            .get(1)
            .map(|v| GoVersionPolicy::normalize(&new_path, &v.text, diagnostics));

        Ok(Replacement {
            old_path,
            old_version,
            new_path,
            new_version,
            statement,
            target,
        })
    }

    /// Applies one replace directive in two phases: select keys, then rewrite
    fn apply_replace(
        packages: &mut WorkingSet,
        replacement: &Replacement,
        source: &SourceText<'_>,
        path: &str,
    ) {
        let targets: Vec<String> = match &replacement.old_version {
            None => packages
                .iter()
                .filter(|(_, record)| record.name == replacement.old_path)
                .map(|(key, _)| key.clone())
                .collect(),
            Some(version) => {
                let key = format!("{}@{}", replacement.old_path, version);
                packages
                    .iter()
                    .any(|(k, _)| *k == key)
                    .then_some(key)
                    .into_iter()
                    .collect()
            }
        };

        for key in targets {
            match &replacement.new_version {
                None => packages.retain(|(k, _)| *k != key),
                Some(version) => {
                    let record = Self::located_record(
                        &replacement.new_path,
                        version,
                        &replacement.statement,
                        (&replacement.target[0], replacement.target.get(1)),
                        source,
                        path,
                    );
                    upsert(packages, key, record);
                }
            }
        }
    }

    /// Builds a record located at `statement`, emitting the version without `v`
    ///
    /// Name and version spans are searched only within the columns of their
    /// own tokens.
    fn located_record(
        name: &str,
        canonical_version: &str,
        statement: &Statement,
        (name_token, version_token): (&Token, Option<&Token>),
        source: &SourceText<'_>,
        path: &str,
    ) -> PackageRecord {
        let version = canonical_version
            .strip_prefix('v')
            .unwrap_or(canonical_version);
        let line = statement.line;

        PackageRecord::new(name, version, Ecosystem::Go)
            .with_block_location(FilePosition::new(line, line, statement.start, statement.end, path))
            .with_name_location(find_name_position(
                source,
                name,
                line,
                (name_token.start, name_token.end),
                path,
            ))
            .with_version_location(version_token.and_then(|token| {
                find_version_position(source, version, line, (token.start, token.end), path)
            }))
    }
}

fn upsert(packages: &mut WorkingSet, key: String, record: PackageRecord) {
    match packages.iter_mut().find(|(k, _)| *k == key) {
        Some((_, existing)) => *existing = record,
        None => packages.push((key, record)),
    }
}

/// Accepts `1.21`, `1.21.3` and prerelease forms such as `1.21rc1`
fn is_go_release(version: &str) -> bool {
    let numeric_end = version
        .find(|c: char| c != '.' && !c.is_ascii_digit())
        .unwrap_or(version.len());
    let (numbers, suffix) = version.split_at(numeric_end);

    let parts: Vec<&str> = numbers.split('.').collect();
    let numbers_ok = (2..=3).contains(&parts.len())
        && parts.iter().all(|p| {
            !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) && (p.len() == 1 || !p.starts_with('0'))
        })
        && parts[0] != "0";

    let suffix_ok = suffix.is_empty() || {
        let letters = suffix.trim_end_matches(|c: char| c.is_ascii_digit());
        !letters.is_empty()
            && letters.len() < suffix.len()
            && letters.bytes().all(|b| b.is_ascii_lowercase())
    };

    numbers_ok && suffix_ok
}

/// Pads a Go release to three numeric components (`1.21` → `1.21.0`)
fn pad_go_release(version: &str) -> String {
    let components: Vec<u64> = version
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect();
    let at = |i: usize| components.get(i).copied().unwrap_or(0);
    format!("{}.{}.{}", at(0), at(1), at(2))
}
