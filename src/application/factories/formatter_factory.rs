use crate::adapters::outbound::formatters::{BinaryFormatter, JsonFormatter, TreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ModelFormatter;

/// Factory for creating model formatters
///
/// Picks the formatter adapter for an output format so that neither the
/// CLI nor the use cases depend on concrete adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// # Examples
    /// ```
    /// use gradle_model::application::dto::OutputFormat;
    /// use gradle_model::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Tree);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ModelFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Binary => Box::new(BinaryFormatter::new()),
            OutputFormat::Tree => Box::new(TreeFormatter::new()),
        }
    }

    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Writing model as JSON...",
            OutputFormat::Binary => "📝 Writing model as binary blob...",
            OutputFormat::Tree => "📝 Writing dependency tree...",
        }
    }
}
