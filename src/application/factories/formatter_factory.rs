use crate::adapters::outbound::formatters::JsonFormatter;
use crate::ports::outbound::InventoryFormatter;

/// Factory for creating inventory formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the JSON formatter, indented when `pretty` is set
    pub fn create(pretty: bool) -> Box<dyn InventoryFormatter> {
        Box::new(JsonFormatter::new(pretty))
    }

    /// Progress message shown before formatting
    pub fn progress_message() -> &'static str {
        "📝 Generating JSON inventory..."
    }
}
