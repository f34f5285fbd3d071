use crate::inventory::domain::PackageRecord;

/// PackageIdentifier port computing the canonical identity of a record
///
/// Must be stable (same record, same identity) and total: `None` is the
/// only failure mode, used for unsupported ecosystems or malformed names.
pub trait PackageIdentifier: Send + Sync {
    fn identify(&self, record: &PackageRecord) -> Option<String>;
}
