use crate::ports::outbound::DiagnosticSink;

/// Sentinel for requirements that do not pin a version
pub const PYPI_ZERO_VERSION: &str = "0.0.0";

/// PinnedVersionPolicy for requirement specifiers
///
/// Only exact pins identify a version: `==1.2.3` and `===1.2.3`. A
/// wildcard pin (`==1.2.*`) degrades to its fixed prefix. Anything else
/// (ranges, no specifier at all) resolves to [`PYPI_ZERO_VERSION`].
pub struct PinnedVersionPolicy;

impl PinnedVersionPolicy {
    /// Resolves the version of `name` declared with `specifier`; never fails
    pub fn normalize(name: &str, specifier: &str, diagnostics: &dyn DiagnosticSink) -> String {
        if let Some(version) = Self::pinned_version(specifier) {
            return version;
        }

        diagnostics.warn(&format!(
            "{} has no pinned version ({:?}), defaulting to {}",
            name,
            specifier.trim(),
            PYPI_ZERO_VERSION
        ));
        PYPI_ZERO_VERSION.to_string()
    }

    /// Version fixed by an exact pin, if the specifier has exactly one
    pub fn pinned_version(specifier: &str) -> Option<String> {
        let mut pins = specifier
            .split(',')
            .map(str::trim)
            .filter_map(|clause| {
                clause
                    .strip_prefix("===")
                    .or_else(|| clause.strip_prefix("=="))
            })
            .map(str::trim);

        let pin = pins.next()?;
        if pins.next().is_some() || pin.is_empty() {
            return None;
        }

        if let Some(prefix) = pin.strip_suffix(".*") {
            return (!prefix.is_empty() && !prefix.contains('*')).then(|| prefix.to_string());
        }
        (!pin.contains('*')).then(|| pin.to_string())
    }
}
