use crate::identity::domain::{SoftwareIdentity, VersionOrdering, VersionScheme};
use std::cmp::Ordering;

/// Characters that make up the numeric prefix of a suffixed version.
/// The suffix starts at the first character outside this set.
pub const NUMERIC_PREFIX_CHARS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

/// VersionComparator service for ordering version strings
///
/// Pure and stateless; safe to call from any number of threads.
/// Malformed input never produces an error, only `VersionOrdering::Incomparable`,
/// so a single bad version cannot break a best-effort ranking.
///
/// For every input, `compare(a, sa, b, sb)` is the `reverse()` of
/// `compare(b, sb, a, sa)`.
pub struct VersionComparator;

impl VersionComparator {
    /// Compares two versions, each tagged with its own version scheme
    ///
    /// Versions with different schemes (compared case-insensitively) are
    /// incomparable, as is any scheme this comparator does not know.
    pub fn compare(
        x_version: &str,
        x_scheme: &str,
        y_version: &str,
        y_scheme: &str,
    ) -> VersionOrdering {
        if !x_scheme.eq_ignore_ascii_case(y_scheme) {
            return VersionOrdering::Incomparable;
        }
        Self::compare_with_scheme(x_version, y_version, VersionScheme::from(x_scheme))
    }

    /// Compares two versions that share one scheme
    pub fn compare_with_scheme(
        x_version: &str,
        y_version: &str,
        scheme: VersionScheme,
    ) -> VersionOrdering {
        match scheme {
            VersionScheme::Alphanumeric => x_version.cmp(y_version).into(),
            VersionScheme::Decimal => Self::compare_decimal(x_version, y_version),
            VersionScheme::MultipartNumeric => Self::compare_multipart_numeric(x_version, y_version),
            VersionScheme::MultipartNumericSuffix => {
                Self::compare_suffixed(x_version, y_version, VersionOrdering::Less)
            }
            VersionScheme::SemVer => {
                Self::compare_suffixed(x_version, y_version, VersionOrdering::Greater)
            }
            VersionScheme::Unknown => VersionOrdering::Incomparable,
        }
    }

    /// Compares the version/scheme pairs of two identity records
    ///
    /// A missing record is incomparable. A missing version reads as the
    /// empty string and a missing scheme as `unknown`.
    pub fn compare_identities(
        x: Option<&SoftwareIdentity>,
        y: Option<&SoftwareIdentity>,
    ) -> VersionOrdering {
        let (Some(x), Some(y)) = (x, y) else {
            return VersionOrdering::Incomparable;
        };

        let unknown = VersionScheme::Unknown.as_str();
        Self::compare(
            x.version().unwrap_or_default(),
            x.version_scheme().unwrap_or(unknown),
            y.version().unwrap_or_default(),
            y.version_scheme().unwrap_or(unknown),
        )
    }

    /// Index of the first character of `version` that is not in `allowed`
    pub fn index_of_not_any(version: &str, allowed: &[char]) -> Option<usize> {
        version
            .char_indices()
            .find(|(_, c)| !allowed.contains(c))
            .map(|(index, _)| index)
    }

    fn compare_decimal(x_version: &str, y_version: &str) -> VersionOrdering {
        match (
            x_version.trim().parse::<f64>(),
            y_version.trim().parse::<f64>(),
        ) {
            (Ok(x), Ok(y)) => x
                .partial_cmp(&y)
                .map_or(VersionOrdering::Incomparable, VersionOrdering::from),
            _ => VersionOrdering::Incomparable,
        }
    }

    /// Part-by-part numeric comparison; missing or empty parts count as 0
    fn compare_multipart_numeric(x_version: &str, y_version: &str) -> VersionOrdering {
        let xs: Vec<&str> = x_version.split('.').collect();
        let ys: Vec<&str> = y_version.split('.').collect();

        for i in 0..xs.len().max(ys.len()) {
            let (Some(x), Some(y)) = (parse_part(xs.get(i)), parse_part(ys.get(i))) else {
                return VersionOrdering::Incomparable;
            };
            match x.cmp(&y) {
                Ordering::Equal => continue,
                decided => return decided.into(),
            }
        }

        VersionOrdering::Equal
    }

    /// Compares the numeric prefixes, then breaks ties on the suffixes.
    ///
    /// `unsuffixed_first` is the result for "x has no suffix, y has one":
    /// `Less` for multipartnumeric+suffix, `Greater` for semver, where a
    /// pre-release suffix sorts before the release.
    fn compare_suffixed(
        x_version: &str,
        y_version: &str,
        unsuffixed_first: VersionOrdering,
    ) -> VersionOrdering {
        let (x_prefix, x_suffix) = split_suffix(x_version);
        let (y_prefix, y_suffix) = split_suffix(y_version);

        match Self::compare_multipart_numeric(x_prefix, y_prefix) {
            VersionOrdering::Equal => {}
            decided => return decided,
        }

        match (x_suffix, y_suffix) {
            (None, None) => VersionOrdering::Equal,
            (None, Some(_)) => unsuffixed_first,
            (Some(_), None) => unsuffixed_first.reverse(),
            (Some(x), Some(y)) => x.cmp(y).into(),
        }
    }
}

fn parse_part(part: Option<&&str>) -> Option<u64> {
    match part.map(|p| p.trim()) {
        None | Some("") => Some(0),
        Some(p) => p.parse().ok(),
    }
}

/// Splits at the first non `[0-9.]` character; the suffix keeps that character
fn split_suffix(version: &str) -> (&str, Option<&str>) {
    match VersionComparator::index_of_not_any(version, NUMERIC_PREFIX_CHARS) {
        Some(index) => (&version[..index], Some(&version[index..])),
        None => (version, None),
    }
}
