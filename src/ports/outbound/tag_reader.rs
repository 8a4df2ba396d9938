use crate::shared::Result;
use std::path::Path;

/// TagReader port for loading tag files
///
/// This port abstracts the file system operations needed to read a
/// rendered software identity tag.
pub trait TagReader {
    /// Reads the raw content of a tag file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The tag file does not exist
    /// - The file cannot be read due to permissions, size limits or I/O errors
    fn read_tag(&self, path: &Path) -> Result<String>;
}
