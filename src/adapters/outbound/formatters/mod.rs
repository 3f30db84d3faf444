/// Formatter adapters for the supported model output formats
mod binary_formatter;
mod json_formatter;
mod tree_formatter;

pub use binary_formatter::BinaryFormatter;
pub use json_formatter::JsonFormatter;
pub use tree_formatter::TreeFormatter;
