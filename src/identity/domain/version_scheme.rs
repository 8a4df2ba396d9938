use std::cmp::Ordering;

/// Version scheme enumeration
///
/// Names the algorithm used to interpret and order a version string.
/// Tokens are matched case-insensitively; anything unrecognized maps to
/// `Unknown`, which can never be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionScheme {
    /// Ordinal string comparison
    Alphanumeric,
    /// Floating point number
    Decimal,
    /// Dot separated unsigned integers (`1.2.10`)
    MultipartNumeric,
    /// Multipart numeric prefix followed by a free-form suffix; no suffix sorts first
    MultipartNumericSuffix,
    /// Multipart numeric prefix with pre-release suffix; the suffix sorts first
    SemVer,
    Unknown,
}

impl VersionScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionScheme::Alphanumeric => "alphanumeric",
            VersionScheme::Decimal => "decimal",
            VersionScheme::MultipartNumeric => "multipartnumeric",
            VersionScheme::MultipartNumericSuffix => "multipartnumeric+suffix",
            VersionScheme::SemVer => "semver",
            VersionScheme::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for VersionScheme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "alphanumeric" => VersionScheme::Alphanumeric,
            "decimal" => VersionScheme::Decimal,
            "multipartnumeric" => VersionScheme::MultipartNumeric,
            "multipartnumeric+suffix" => VersionScheme::MultipartNumericSuffix,
            "semver" => VersionScheme::SemVer,
            _ => VersionScheme::Unknown,
        })
    }
}

impl From<&str> for VersionScheme {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(scheme) => scheme,
            Err(never) => match never {},
        }
    }
}

impl std::fmt::Display for VersionScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of comparing two versions
///
/// `Incomparable` means no ordering claim can be made (different schemes,
/// unknown scheme or malformed input). It is distinct from `Equal` but
/// collapses to `Ordering::Equal` for APIs that only understand three-way
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionOrdering {
    Less,
    Equal,
    Greater,
    Incomparable,
}

impl VersionOrdering {
    pub fn to_ordering(self) -> Ordering {
        match self {
            VersionOrdering::Less => Ordering::Less,
            VersionOrdering::Greater => Ordering::Greater,
            VersionOrdering::Equal | VersionOrdering::Incomparable => Ordering::Equal,
        }
    }

    pub fn is_incomparable(self) -> bool {
        self == VersionOrdering::Incomparable
    }

    /// Swaps `Less` and `Greater`; `Equal` and `Incomparable` are kept
    pub fn reverse(self) -> Self {
        match self {
            VersionOrdering::Less => VersionOrdering::Greater,
            VersionOrdering::Greater => VersionOrdering::Less,
            other => other,
        }
    }
}

impl From<Ordering> for VersionOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => VersionOrdering::Less,
            Ordering::Equal => VersionOrdering::Equal,
            Ordering::Greater => VersionOrdering::Greater,
        }
    }
}

impl std::fmt::Display for VersionOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionOrdering::Less => write!(f, "less"),
            VersionOrdering::Equal => write!(f, "equal"),
            VersionOrdering::Greater => write!(f, "greater"),
            VersionOrdering::Incomparable => write!(f, "incomparable"),
        }
    }
}
