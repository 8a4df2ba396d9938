use clap::{Parser, Subcommand};
use std::path::PathBuf;

use swid_identity::application::dto::OutputFormat;
use swid_identity::identity::domain::VersionOrdering;

/// Scheme used when neither `--scheme` nor the config file names one
pub const DEFAULT_VERSION_SCHEME: &str = "semver";

/// Inspect software identity tags and order package versions
#[derive(Parser, Debug)]
#[command(name = "swidtag")]
#[command(version)]
#[command(about = "Inspect software identity tags and order package versions", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./swidtag.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two versions
    Compare {
        /// First version
        a: String,
        /// Second version
        b: String,
        /// Version scheme of both versions (alphanumeric, decimal, multipartnumeric,
        /// multipartnumeric+suffix, semver)
        #[arg(short, long)]
        scheme: Option<String>,
        /// Version scheme of the second version, if it differs
        #[arg(long)]
        scheme_b: Option<String>,
        /// Exit with code 1 when the versions cannot be ordered
        #[arg(long)]
        fail_on_incomparable: bool,
    },

    /// Print versions in ascending order
    Sort {
        /// Versions to sort
        #[arg(required = true)]
        versions: Vec<String>,
        /// Version scheme shared by all versions
        #[arg(short, long)]
        scheme: Option<String>,
    },

    /// Render a tag file
    Show {
        /// Path to a JSON tag file
        tag: PathBuf,
        /// Output format: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank tag files by version and report the latest
    Rank {
        /// Paths to JSON tag files
        #[arg(required = true)]
        tags: Vec<PathBuf>,
        /// Fail on the first tag that cannot be loaded instead of skipping it
        #[arg(long)]
        strict: bool,
        /// Only print warnings and errors on stderr
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Renders one comparison as `a <op> b (scheme)`
pub fn describe_comparison(
    a: &str,
    b: &str,
    scheme_a: &str,
    scheme_b: &str,
    ordering: VersionOrdering,
) -> String {
    let operator = match ordering {
        VersionOrdering::Less => "<",
        VersionOrdering::Equal => "=",
        VersionOrdering::Greater => ">",
        VersionOrdering::Incomparable => "?",
    };

    let schemes = if scheme_a.eq_ignore_ascii_case(scheme_b) {
        scheme_a.to_string()
    } else {
        format!("{} vs {}", scheme_a, scheme_b)
    };

    if ordering.is_incomparable() {
        format!("{} {} {} ({}, incomparable)", a, operator, b, schemes)
    } else {
        format!("{} {} {} ({})", a, operator, b, schemes)
    }
}
