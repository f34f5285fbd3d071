/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: manifest extractors,
/// filesystem access, console output, identity and formatting.
pub mod outbound;
