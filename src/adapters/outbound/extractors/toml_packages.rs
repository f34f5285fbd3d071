//! Shared reader for TOML lockfiles made of `[[package]]` tables
//!
//! Used by the uv.lock and Cargo.lock extractors; both carry a `name` and
//! a `version` string per table.

use crate::inventory::domain::{Ecosystem, FilePosition, PackageRecord};
use crate::inventory::services::SourceText;
use crate::shared::error::ExtractionError;
use serde::Deserialize;
use std::ops::Range;
use toml::Spanned;

#[derive(Debug, Deserialize)]
struct PackageTables {
    #[serde(default)]
    package: Vec<PackageTable>,
}

#[derive(Debug, Deserialize)]
struct PackageTable {
    name: Spanned<String>,
    #[serde(default)]
    version: Option<Spanned<String>>,
}

/// Parses every `[[package]]` table into a located record
///
/// Tables without a version are skipped. Records are returned in document
/// order and are not deduplicated.
pub fn extract_package_tables(
    path: &str,
    content: &str,
    ecosystem: Ecosystem,
) -> Result<Vec<PackageRecord>, ExtractionError> {
    let tables: PackageTables =
        toml::from_str(content).map_err(|e| ExtractionError::parse(path, e))?;
    let source = SourceText::new(content);

    let records = tables
        .package
        .into_iter()
        .filter_map(|table| {
            let version = table.version.filter(|v| !v.get_ref().is_empty())?;
            let block = block_position(&source, table.name.span(), path).unwrap_or_default();

            Some(
                PackageRecord::new(table.name.get_ref().as_str(), version.get_ref().as_str(), ecosystem)
                    .with_block_location(block)
                    .with_name_location(string_position(&source, table.name.span(), path))
                    .with_version_location(string_position(&source, version.span(), path)),
            )
        })
        .collect();

    Ok(records)
}

/// Position of a basic string's body, given the span of the quoted literal
fn string_position(source: &SourceText<'_>, span: Range<usize>, path: &str) -> Option<FilePosition> {
    if span.end < span.start + 2 {
        return None;
    }
    let body = source.text().get(span.start + 1..span.end - 1)?;
    if body.contains('\n') {
        return None;
    }
    let (line, column) = source.line_column(span.start + 1);
    Some(FilePosition::new(
        line,
        line,
        column,
        column + body.chars().count() as i64,
        path,
    ))
}

/// The `[[package]]` table enclosing the byte offset `span.start`
///
/// Starts at the header line and ends at the last non-blank line before the
/// next table that is not a sub-table of this package.
fn block_position(source: &SourceText<'_>, span: Range<usize>, path: &str) -> Option<FilePosition> {
    let (member_line, _) = source.line_column(span.start);

    let header_line = (1..=member_line)
        .rev()
        .find(|&n| source.line(n).is_some_and(|l| header_kind(l) == Some(Header::Package)))?;

    let mut last_line = header_line;
    let mut n = header_line + 1;
    while let Some(line) = source.line(n) {
        match header_kind(line) {
            Some(Header::SubTable) | None => {
                if !line.trim().is_empty() {
                    last_line = n;
                }
            }
            Some(_) => break,
        }
        n += 1;
    }

    let end_column = source.line(last_line)?.chars().count() as i64 + 1;
    Some(FilePosition::new(header_line, last_line, 1, end_column, path))
}

#[derive(Debug, PartialEq, Eq)]
enum Header {
    Package,
    SubTable,
    Other,
}

fn header_kind(line: &str) -> Option<Header> {
    let line = line.trim();
    if !line.starts_with('[') {
        return None;
    }
    let inner: String = line
        .trim_start_matches('[')
        .split(']')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    Some(if inner == "package" && line.starts_with("[[") {
        Header::Package
    } else if inner.starts_with("package.") {
        Header::SubTable
    } else {
        Header::Other
    })
}
