/// Data Transfer Objects for the application layer
mod inventory_request;
mod inventory_response;

pub use inventory_request::{InventoryRequest, DEFAULT_MAX_PARALLEL, DEFAULT_TIMEOUT};
pub use inventory_response::{InventoryResponse, SkippedManifest};
