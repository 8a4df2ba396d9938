/// Shared utilities and common types
pub mod error;
pub mod result;

pub use result::Result;
