/// Canonical identity adapters
mod purl;

pub use purl::PurlIdentifier;
