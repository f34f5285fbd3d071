/// Use cases module containing application business logic orchestration
mod build_inventory;

pub use build_inventory::BuildInventoryUseCase;
