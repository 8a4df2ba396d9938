/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod inspect;
mod output_format;
mod rank;

pub use inspect::{InspectRequest, InspectResponse};
pub use output_format::OutputFormat;
pub use rank::{RankRequest, RankResponse, RankedTag};
