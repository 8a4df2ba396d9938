//! swid-identity - ISO/IEC 19770-2 software identity records and version ordering
//!
//! This library models a software identity (SWID) tag as a lazily materialized
//! element tree with typed accessors, and orders package versions across the
//! version schemes a tag can declare. It follows the hexagonal layout:
//!
//! - **Domain Layer** (`identity`): the identity record, its views, and the version comparator
//! - **Application Layer** (`application`): use cases for inspecting and ranking tag files
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use swid_identity::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = RankTagsUseCase::new(
//!     FileSystemReader::new(),
//!     JsonTagFormatter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = RankRequest::new(
//!     vec![PathBuf::from("requests-2.30.0.json"), PathBuf::from("requests-2.31.0.json")],
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! if let Some(latest) = response.latest() {
//!     println!("{}", MarkdownFormatter::new().format(&latest.identity)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod identity;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonTagFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        InspectRequest, InspectResponse, OutputFormat, RankRequest, RankResponse, RankedTag,
    };
    pub use crate::application::use_cases::{InspectTagUseCase, RankTagsUseCase};
    pub use crate::identity::domain::{
        Element, Entity, Link, LinkAttributes, SoftwareIdentity, SoftwareMetadata,
        VersionOrdering, VersionScheme,
    };
    pub use crate::identity::services::{VersionComparator, VersionRanker};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, TagFormatter, TagParser, TagReader,
    };
    pub use crate::shared::error::SwidError;
    pub use crate::shared::Result;
}
