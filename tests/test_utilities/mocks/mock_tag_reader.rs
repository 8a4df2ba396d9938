use std::collections::HashMap;
use std::path::{Path, PathBuf};
use swid_identity::prelude::*;

/// Mock TagReader for testing, serving tag content from memory
#[derive(Default)]
pub struct MockTagReader {
    pub tags: HashMap<PathBuf, String>,
    pub failing: Vec<PathBuf>,
}

impl MockTagReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, path: &str, content: &str) -> Self {
        self.tags.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure(mut self, path: &str) -> Self {
        self.failing.push(PathBuf::from(path));
        self
    }
}

impl TagReader for MockTagReader {
    fn read_tag(&self, path: &Path) -> Result<String> {
        if self.failing.iter().any(|p| p == path) {
            anyhow::bail!("Mock tag read failure");
        }
        match self.tags.get(path) {
            Some(content) => Ok(content.clone()),
            None => Err(SwidError::TagNotFound {
                path: path.to_path_buf(),
                suggestion: "No mock content registered for this path".to_string(),
            }
            .into()),
        }
    }
}
