use crate::identity::domain::SoftwareIdentity;
use std::path::PathBuf;

/// RankRequest - request DTO for ranking several tag files by version
#[derive(Debug, Clone)]
pub struct RankRequest {
    pub tag_paths: Vec<PathBuf>,
    /// Fail instead of skipping tags that cannot be read or parsed
    pub strict: bool,
}

impl RankRequest {
    pub fn new(tag_paths: Vec<PathBuf>, strict: bool) -> Self {
        Self { tag_paths, strict }
    }
}

/// A loaded tag together with the file it came from
#[derive(Debug, Clone)]
pub struct RankedTag {
    pub path: PathBuf,
    pub identity: SoftwareIdentity,
}

/// RankResponse - tags in ascending version order
#[derive(Debug, Clone)]
pub struct RankResponse {
    /// Loaded tags, lowest version first; incomparable tags keep input order
    pub ranked: Vec<RankedTag>,
    /// Index into `ranked` of the latest tag
    pub latest: Option<usize>,
    /// Files that were skipped because they could not be loaded
    pub skipped: Vec<PathBuf>,
}

impl RankResponse {
    pub fn latest(&self) -> Option<&RankedTag> {
        self.latest.and_then(|index| self.ranked.get(index))
    }
}
