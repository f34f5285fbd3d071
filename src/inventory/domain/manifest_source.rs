use super::PackageRecord;

/// The packages extracted from one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSource {
    path: String,
    packages: Vec<PackageRecord>,
}

impl ManifestSource {
    pub fn new(path: impl Into<String>, packages: Vec<PackageRecord>) -> Self {
        Self {
            path: path.into(),
            packages,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }
}
