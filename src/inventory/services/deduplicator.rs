use crate::inventory::domain::PackageRecord;
use std::collections::HashMap;

/// Deduplicator service collapsing repeated declarations inside one manifest
///
/// Records are keyed by `name@version`. On collision the later record fully
/// replaces the earlier one but keeps the earlier one's slot, so output
/// order follows first declaration.
pub struct Deduplicator;

impl Deduplicator {
    pub fn deduplicate(records: Vec<PackageRecord>) -> Vec<PackageRecord> {
        let mut slots: HashMap<String, usize> = HashMap::with_capacity(records.len());
        let mut unique: Vec<PackageRecord> = Vec::with_capacity(records.len());

        for record in records {
            let key = record.dedup_key();
            match slots.get(&key) {
                Some(&slot) => unique[slot] = record,
                None => {
                    slots.insert(key, unique.len());
                    unique.push(record);
                }
            }
        }

        unique
    }
}
