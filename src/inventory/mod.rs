/// Inventory domain - package records, locations and the pure logic
/// that normalizes, deduplicates and consolidates them.
pub mod domain;
pub mod policies;
pub mod services;
