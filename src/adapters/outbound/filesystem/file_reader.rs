use crate::ports::outbound::TagReader;
use crate::shared::error::SwidError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Maximum tag file size (4 MB); identity tags are small documents
const MAX_TAG_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// FileSystemReader adapter for reading tag files from the file system
///
/// Implements the TagReader port. Symbolic links, non-regular files and
/// oversized files are rejected before anything is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Checks the file without following symlinks, then reads it
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read tag file metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        if metadata.len() > MAX_TAG_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                MAX_TAG_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read tag file: {}", e))
    }
}

impl TagReader for FileSystemReader {
    fn read_tag(&self, path: &Path) -> Result<String> {
        // symlink_metadata does not follow links, so a dangling link still
        // reaches the symlink rejection below
        let missing = matches!(
            fs::symlink_metadata(path),
            Err(ref e) if e.kind() == io::ErrorKind::NotFound
        );
        if missing {
            return Err(SwidError::TagNotFound {
                path: path.to_path_buf(),
                suggestion: "Check that the path points to a JSON software identity tag."
                    .to_string(),
            }
            .into());
        }

        self.safe_read_file(path).map_err(|e| {
            SwidError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
