mod version_comparator;
mod version_ranker;

pub use version_comparator::{VersionComparator, NUMERIC_PREFIX_CHARS};
pub use version_ranker::VersionRanker;
