use crate::application::dto::InventoryResponse;
use crate::shared::Result;

/// InventoryFormatter port for rendering the consolidated inventory
pub trait InventoryFormatter {
    /// Formats the inventory response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &InventoryResponse) -> Result<String>;
}
