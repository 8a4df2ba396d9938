use super::VersionComparator;
use crate::identity::domain::{SoftwareIdentity, VersionOrdering, VersionScheme};

/// VersionRanker service for ordering candidates by version
///
/// The version comparator is not a total order (incomparable pairs report
/// no ordering), so ranking uses a stable insertion pass instead of
/// `slice::sort_by`, which may panic on inconsistent comparisons.
/// Candidates only move past neighbours they are strictly greater than;
/// incomparable and equal pairs keep their input order.
pub struct VersionRanker;

impl VersionRanker {
    /// Ranks items ascending using `compare`
    pub fn rank_by<T, F>(items: &mut [T], compare: F)
    where
        F: Fn(&T, &T) -> VersionOrdering,
    {
        for i in 1..items.len() {
            let mut j = i;
            while j > 0 && compare(&items[j - 1], &items[j]) == VersionOrdering::Greater {
                items.swap(j - 1, j);
                j -= 1;
            }
        }
    }

    /// Ranks plain version strings that share one scheme
    pub fn rank_versions<S: AsRef<str>>(versions: &mut [S], scheme: VersionScheme) {
        Self::rank_by(versions, |x, y| {
            VersionComparator::compare_with_scheme(x.as_ref(), y.as_ref(), scheme)
        });
    }

    /// Ranks identity records by their version and version scheme
    pub fn rank_identities(identities: &mut [SoftwareIdentity]) {
        Self::rank_by(identities, |x, y| {
            VersionComparator::compare_identities(Some(x), Some(y))
        });
    }

    /// Picks the highest item; ties and incomparable candidates keep the earlier one
    pub fn latest_by<'a, T, I, F>(items: I, compare: F) -> Option<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T, &T) -> VersionOrdering,
    {
        items.into_iter().fold(None, |best, candidate| match best {
            Some(current) if compare(candidate, current) != VersionOrdering::Greater => {
                Some(current)
            }
            _ => Some(candidate),
        })
    }

    pub fn latest_identity<'a, I>(identities: I) -> Option<&'a SoftwareIdentity>
    where
        I: IntoIterator<Item = &'a SoftwareIdentity>,
    {
        Self::latest_by(identities, |x, y| {
            VersionComparator::compare_identities(Some(x), Some(y))
        })
    }
}
