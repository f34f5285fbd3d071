use crate::ports::outbound::DiagnosticSink;

/// Sentinel for Go versions that carry no usable signal
pub const GO_ZERO_VERSION: &str = "v0.0.0";

/// GoVersionPolicy for turning declared module versions into canonical semver
///
/// Resolution order:
/// 1. the declared version, canonicalized (`v1.2` → `v1.2.0`)
/// 2. the major version embedded in the module path (`/v3` → `v3.0.0`)
/// 3. [`GO_ZERO_VERSION`], reported once through the diagnostic sink
pub struct GoVersionPolicy;

impl GoVersionPolicy {
    /// Resolves `version` for module `path`; never fails
    pub fn normalize(path: &str, version: &str, diagnostics: &dyn DiagnosticSink) -> String {
        if let Some(canonical) = Self::canonical_version(version) {
            return canonical;
        }

        if let Some(recovered) = Self::split_path_major(path)
            .and_then(Self::path_major_prefix)
            .and_then(|major| Self::canonical_version(&major))
        {
            return recovered;
        }

        diagnostics.warn(&format!(
            "{}@{} is not a canonical version, defaulting to {}",
            path, version, GO_ZERO_VERSION
        ));
        GO_ZERO_VERSION.to_string()
    }

    /// Canonical form of a Go semantic version, or `None` if it is not one
    ///
    /// Build metadata is dropped except for `+incompatible`.
    pub fn canonical_version(version: &str) -> Option<String> {
        let parsed = ParsedSemver::parse(version)?;
        let mut canonical = format!(
            "v{}.{}.{}{}",
            parsed.major, parsed.minor, parsed.patch, parsed.prerelease
        );
        if parsed.build == "+incompatible" {
            canonical.push_str(parsed.build);
        }
        Some(canonical)
    }

    /// Returns the major-version suffix of a module path (`/v2`, `.v1`)
    ///
    /// `None` when the path has no suffix or the suffix is malformed.
    pub fn split_path_major(path: &str) -> Option<&str> {
        if path.starts_with("gopkg.in/") {
            return Self::split_gopkg_in(path);
        }

        let bytes = path.as_bytes();
        let mut i = bytes.len();
        let mut dot = false;
        while i > 0 && (bytes[i - 1].is_ascii_digit() || bytes[i - 1] == b'.') {
            dot |= bytes[i - 1] == b'.';
            i -= 1;
        }
        if i <= 1 || i == bytes.len() || bytes[i - 1] != b'v' || bytes[i - 2] != b'/' {
            return None;
        }

        let major = &path[i - 2..];
        if dot || major.len() <= 2 || major.as_bytes()[2] == b'0' || major == "/v1" {
            return None;
        }
        Some(major)
    }

    fn split_gopkg_in(path: &str) -> Option<&str> {
        let bytes = path.as_bytes();
        let mut i = path.strip_suffix("-unstable").unwrap_or(path).len();
        while i > 0 && bytes[i - 1].is_ascii_digit() {
            i -= 1;
        }
        if i <= 1 || bytes[i - 1] != b'v' || bytes[i - 2] != b'.' {
            return None;
        }

        let major = &path[i - 2..];
        if major.len() <= 2 || (major.as_bytes()[2] == b'0' && major != ".v0") {
            return None;
        }
        Some(major)
    }

    /// `/v2` → `v2`, `.v1-unstable` → `v1`
    pub fn path_major_prefix(path_major: &str) -> Option<String> {
        let trimmed = path_major.strip_suffix("-unstable").unwrap_or(path_major);
        let major = trimmed
            .strip_prefix('/')
            .or_else(|| trimmed.strip_prefix('.'))?;
        (major.len() > 1).then(|| major.to_string())
    }
}

struct ParsedSemver<'a> {
    major: &'a str,
    minor: &'a str,
    patch: &'a str,
    prerelease: &'a str,
    build: &'a str,
}

impl<'a> ParsedSemver<'a> {
    fn parse(version: &'a str) -> Option<Self> {
        let rest = version.strip_prefix('v')?;

        let (major, rest) = parse_number(rest)?;
        if rest.is_empty() {
            return Some(Self::short(major, "0", "0"));
        }
        let (minor, rest) = parse_number(rest.strip_prefix('.')?)?;
        if rest.is_empty() {
            return Some(Self::short(major, minor, "0"));
        }
        let (patch, mut rest) = parse_number(rest.strip_prefix('.')?)?;

        let mut prerelease = "";
        if rest.starts_with('-') {
            let end = rest.find('+').unwrap_or(rest.len());
            prerelease = &rest[..end];
            if !valid_identifiers(&prerelease[1..], true) {
                return None;
            }
            rest = &rest[end..];
        }

        let mut build = "";
        if rest.starts_with('+') {
            build = rest;
            if !valid_identifiers(&build[1..], false) {
                return None;
            }
            rest = "";
        }

        rest.is_empty().then_some(Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    fn short(major: &'a str, minor: &'a str, patch: &'a str) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: "",
            build: "",
        }
    }
}

/// Leading decimal number without superfluous zeros, and the remainder
fn parse_number(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let number = &s[..end];
    if number.is_empty() || (number.len() > 1 && number.starts_with('0')) {
        return None;
    }
    Some((number, &s[end..]))
}

fn valid_identifiers(s: &str, reject_numeric_leading_zero: bool) -> bool {
    s.split('.').all(|ident| {
        !ident.is_empty()
            && ident
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !(reject_numeric_leading_zero
                && ident.len() > 1
                && ident.starts_with('0')
                && ident.bytes().all(|b| b.is_ascii_digit()))
    })
}
