/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the pipeline is driven directly
/// through `BuildInventoryUseCase`.
pub mod outbound;
