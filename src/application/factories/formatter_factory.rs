use crate::adapters::outbound::formatters::{JsonTagFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TagFormatter;

/// Factory for creating tag formatters
///
/// Selects the infrastructure adapter for an output format so the CLI
/// never names concrete formatter types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use swid_identity::application::dto::OutputFormat;
    /// use swid_identity::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn TagFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonTagFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON software identity tag...",
            OutputFormat::Markdown => "📝 Rendering Markdown identity report...",
        }
    }
}
