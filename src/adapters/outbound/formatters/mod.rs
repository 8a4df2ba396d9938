/// Formatter adapters for the supported tag renderings
mod json_tag_formatter;
mod markdown_formatter;

pub use json_tag_formatter::JsonTagFormatter;
pub use markdown_formatter::MarkdownFormatter;
