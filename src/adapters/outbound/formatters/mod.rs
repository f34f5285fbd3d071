/// Formatter adapters for inventory output
mod json_formatter;

pub use json_formatter::JsonFormatter;
