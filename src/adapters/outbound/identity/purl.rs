use crate::inventory::domain::{Ecosystem, PackageRecord};
use crate::ports::outbound::PackageIdentifier;

/// PurlIdentifier adapter producing package URLs as canonical identities
///
/// - Go: `pkg:golang/<module path>@<version>`, one encoded segment per path element
/// - PyPI: `pkg:pypi/<normalized name>@<version>`
/// - crates.io: `pkg:cargo/<name>@<version>`
#[derive(Debug, Default, Clone, Copy)]
pub struct PurlIdentifier;

impl PurlIdentifier {
    pub fn new() -> Self {
        Self
    }

    fn purl_type(ecosystem: Ecosystem) -> &'static str {
        match ecosystem {
            Ecosystem::Go => "golang",
            Ecosystem::PyPI => "pypi",
            Ecosystem::CratesIo => "cargo",
        }
    }

    /// Encodes each `/`-separated segment; empty segments make the name invalid
    fn encode_path(name: &str) -> Option<String> {
        let segments = name
            .split('/')
            .map(|segment| (!segment.is_empty()).then(|| urlencoding::encode(segment).into_owned()))
            .collect::<Option<Vec<_>>>()?;
        Some(segments.join("/"))
    }

    /// PEP 503 normalization: lowercase, runs of `-`, `_` and `.` become `-`
    fn normalize_pypi_name(name: &str) -> String {
        let mut normalized = String::with_capacity(name.len());
        let mut in_separator_run = false;
        for c in name.chars() {
            if matches!(c, '-' | '_' | '.') {
                if !in_separator_run {
                    normalized.push('-');
                }
                in_separator_run = true;
            } else {
                normalized.extend(c.to_lowercase());
                in_separator_run = false;
            }
        }
        normalized
    }
}

impl PackageIdentifier for PurlIdentifier {
    fn identify(&self, record: &PackageRecord) -> Option<String> {
        let name = record.name.trim();
        let version = record.version.trim();
        if name.is_empty() || version.is_empty() {
            return None;
        }

        let name = match record.ecosystem {
            Ecosystem::Go => Self::encode_path(name)?,
            Ecosystem::PyPI => urlencoding::encode(&Self::normalize_pypi_name(name)).into_owned(),
            Ecosystem::CratesIo => urlencoding::encode(name).into_owned(),
        };

        Some(format!(
            "pkg:{}/{}@{}",
            Self::purl_type(record.ecosystem),
            name,
            urlencoding::encode(version)
        ))
    }
}
