use super::load_tag::load_tag;
use crate::application::dto::{RankRequest, RankResponse, RankedTag};
use crate::identity::domain::VersionOrdering;
use crate::identity::services::{VersionComparator, VersionRanker};
use crate::ports::outbound::{ProgressReporter, TagParser, TagReader};
use crate::shared::Result;

/// RankTagsUseCase - loads several tag files and orders them by version
///
/// This is the selection workflow: candidates found by discovery are ranked
/// with the version comparator and the latest one is picked. Tags whose
/// versions cannot be ordered keep their input position.
///
/// # Type Parameters
/// * `TR` - TagReader implementation
/// * `TP` - TagParser implementation
/// * `PR` - ProgressReporter implementation
pub struct RankTagsUseCase<TR, TP, PR> {
    tag_reader: TR,
    tag_parser: TP,
    progress_reporter: PR,
}

impl<TR, TP, PR> RankTagsUseCase<TR, TP, PR>
where
    TR: TagReader,
    TP: TagParser,
    PR: ProgressReporter,
{
    pub fn new(tag_reader: TR, tag_parser: TP, progress_reporter: PR) -> Self {
        Self {
            tag_reader,
            tag_parser,
            progress_reporter,
        }
    }

    /// Executes the ranking
    ///
    /// # Errors
    /// - In strict mode, the first tag that cannot be loaded
    /// - When no tag at all could be loaded
    pub fn execute(&self, request: RankRequest) -> Result<RankResponse> {
        let total = request.tag_paths.len();
        self.progress_reporter
            .report(&format!("📖 Loading {} tag file(s)...", total));

        let mut ranked = Vec::with_capacity(total);
        let mut skipped = Vec::new();

        for (index, path) in request.tag_paths.into_iter().enumerate() {
            let label = path.display().to_string();
            self.progress_reporter
                .report_progress(index + 1, total, Some(&label));

            match load_tag(&self.tag_reader, &self.tag_parser, &path) {
                Ok(identity) => ranked.push(RankedTag { path, identity }),
                Err(e) if request.strict => return Err(e),
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping '{}': {}",
                        label,
                        e.to_string().lines().next().unwrap_or_default()
                    ));
                    skipped.push(path);
                }
            }
        }

        if ranked.is_empty() {
            anyhow::bail!(
                "None of the {} tag file(s) could be loaded. Nothing to rank.",
                total
            );
        }

        VersionRanker::rank_by(&mut ranked, compare_tags);
        let latest = VersionRanker::latest_by(&ranked, compare_tags)
            .and_then(|best| ranked.iter().position(|tag| std::ptr::eq(tag, best)));

        self.progress_reporter
            .report_completion(&format!("✅ Ranked {} tag(s)", ranked.len()));

        Ok(RankResponse {
            ranked,
            latest,
            skipped,
        })
    }
}

fn compare_tags(x: &RankedTag, y: &RankedTag) -> VersionOrdering {
    VersionComparator::compare_identities(Some(&x.identity), Some(&y.identity))
}
