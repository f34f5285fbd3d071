use crate::inventory::domain::{
    ConsolidatedPackage, Inventory, ManifestSource, PackageLocation, PackageLocations,
    PackageRecord,
};
use crate::ports::outbound::{DiagnosticSink, PackageIdentifier};
use std::collections::HashSet;

/// PackageGrouper service merging many manifests into one inventory
///
/// Sources are consumed in the given order, and records in source order.
/// The first record seen for an identity fixes the entry's name, version
/// and ecosystem; later records only contribute locations.
pub struct PackageGrouper<'a> {
    identifier: &'a dyn PackageIdentifier,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> PackageGrouper<'a> {
    pub fn new(identifier: &'a dyn PackageIdentifier, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self {
            identifier,
            diagnostics,
        }
    }

    /// Groups every record of every source by canonical identity
    ///
    /// Records without an identity are dropped (and reported at debug level).
    /// Block spans already emitted for the current source are not added
    /// again; the set is reset for every source. An entry never holds two
    /// locations with the same block span.
    pub fn group(&self, sources: &[ManifestSource]) -> Inventory {
        let mut inventory = Inventory::new();

        for source in sources {
            let mut seen_in_source: HashSet<PackageLocation> = HashSet::new();

            for record in source.packages() {
                let Some(identity) = self.identifier.identify(record) else {
                    self.diagnostics.debug(&format!(
                        "skipping {}@{} ({}) from {}: no canonical identity",
                        record.name,
                        record.version,
                        record.ecosystem,
                        source.path()
                    ));
                    continue;
                };

                let locations = record
                    .block_location
                    .is_valid()
                    .then(|| Self::package_locations(source.path(), record));

                match inventory.get_mut(&identity) {
                    Some(existing) => {
                        let Some(locations) = locations else {
                            continue;
                        };
                        if seen_in_source.contains(&locations.block)
                            || existing.has_block(&locations.block)
                        {
                            continue;
                        }
                        seen_in_source.insert(locations.block.clone());
                        existing.locations.push(locations);
                    }
                    None => {
                        let mut package = ConsolidatedPackage::new(
                            record.name.clone(),
                            record.version.clone(),
                            record.ecosystem,
                        );
                        if let Some(locations) = locations {
                            seen_in_source.insert(locations.block.clone());
                            package.locations.push(locations);
                        }
                        inventory.insert(identity, package);
                    }
                }
            }
        }

        inventory
    }

    fn package_locations(path: &str, record: &PackageRecord) -> PackageLocations {
        PackageLocations {
            block: PackageLocation::from_position(path, &record.block_location),
            name: PackageLocation::from_optional(path, record.name_location.as_ref()),
            version: PackageLocation::from_optional(path, record.version_location.as_ref()),
        }
    }
}
