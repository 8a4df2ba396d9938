/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, text formats).
pub mod output_presenter;
pub mod progress_reporter;
pub mod tag_formatter;
pub mod tag_reader;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use tag_formatter::{TagFormatter, TagParser};
pub use tag_reader::TagReader;
