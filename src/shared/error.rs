use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between a clean run, a
/// comparison that could not be ordered, and real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The versions could not be ordered and `--fail-on-incomparable` was given
    Incomparable = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, malformed tag, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Incomparable => write!(f, "Incomparable (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for software identity handling.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Functions return `shared::Result` (anyhow); callers that need to react
/// to a specific failure can `downcast_ref::<SwidError>()`.
#[derive(Debug, Error)]
pub enum SwidError {
    /// A recorded metadata value was about to be replaced by a different one
    #[error("Metadata '{key}' is already set to \"{existing}\" and cannot be changed to \"{attempted}\"\n\n💡 Hint: Metadata values are write-once; check which discovery step produced the conflicting value")]
    InvalidMetadataMutation {
        key: String,
        existing: String,
        attempted: String,
    },

    #[error("Invalid software identity document: {reason}")]
    InvalidDocument { reason: String },

    #[error("Tag file not found: {path}\n\n💡 Hint: {suggestion}")]
    TagNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse tag file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains a JSON software identity document")]
    TagParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
