mod cli;
mod config;

use cli::{describe_comparison, Args, Command, DEFAULT_VERSION_SCHEME};
use config::ConfigFile;
use std::path::PathBuf;
use std::process;
use swid_identity::adapters::outbound::console::StderrProgressReporter;
use swid_identity::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
use swid_identity::adapters::outbound::formatters::JsonTagFormatter;
use swid_identity::application::dto::{InspectRequest, RankRequest, RankResponse};
use swid_identity::application::factories::{FormatterFactory, PresenterFactory};
use swid_identity::application::use_cases::{InspectTagUseCase, RankTagsUseCase};
use swid_identity::identity::domain::VersionScheme;
use swid_identity::identity::services::{VersionComparator, VersionRanker};
use swid_identity::ports::outbound::OutputPresenter;
use swid_identity::shared::error::ExitCode;
use swid_identity::shared::Result;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Compare {
            a,
            b,
            scheme,
            scheme_b,
            fail_on_incomparable,
        } => {
            let scheme_a = resolve_scheme(scheme, &config);
            let scheme_b = scheme_b.unwrap_or_else(|| scheme_a.clone());
            let ordering = VersionComparator::compare(&a, &scheme_a, &b, &scheme_b);

            StdoutPresenter::new().present(&describe_comparison(
                &a, &b, &scheme_a, &scheme_b, ordering,
            ))?;

            let fail_on_incomparable =
                fail_on_incomparable || config.fail_on_incomparable.unwrap_or(false);
            if ordering.is_incomparable() && fail_on_incomparable {
                return Ok(ExitCode::Incomparable);
            }
            Ok(ExitCode::Success)
        }

        Command::Sort { mut versions, scheme } => {
            let scheme_token = resolve_scheme(scheme, &config);
            let scheme = VersionScheme::from(scheme_token.as_str());
            if scheme == VersionScheme::Unknown {
                eprintln!(
                    "⚠️  Warning: Unknown version scheme '{}'. Versions are printed in input order.",
                    scheme_token
                );
            }

            VersionRanker::rank_versions(&mut versions, scheme);
            StdoutPresenter::new().present(&versions.join("\n"))?;
            Ok(ExitCode::Success)
        }

        Command::Show {
            tag,
            format,
            output,
        } => {
            let use_case = InspectTagUseCase::new(FileSystemReader::new(), JsonTagFormatter::new());
            let response = use_case.execute(InspectRequest::new(tag))?;

            let format = format.or_else(|| config.format()).unwrap_or_default();
            eprintln!("{}", FormatterFactory::progress_message(format));

            let formatter = FormatterFactory::create(format);
            let rendered = formatter.format(&response.identity)?;

            PresenterFactory::create(output.into()).present(&rendered)?;
            Ok(ExitCode::Success)
        }

        Command::Rank {
            tags,
            strict,
            quiet,
        } => {
            let progress_reporter = if quiet {
                StderrProgressReporter::quiet()
            } else {
                StderrProgressReporter::new()
            };
            let use_case =
                RankTagsUseCase::new(FileSystemReader::new(), JsonTagFormatter::new(), progress_reporter);

            let strict = strict || config.strict.unwrap_or(false);
            let response = use_case.execute(RankRequest::new(tags, strict))?;

            StdoutPresenter::new().present(&render_ranking(&response))?;
            Ok(ExitCode::Success)
        }
    }
}

/// Explicit `--config` must exist; otherwise `./swidtag.config.yml` is picked up if present
fn load_config(explicit: Option<&std::path::Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}

/// CLI flag, then config file, then the built-in default
fn resolve_scheme(cli_scheme: Option<String>, config: &ConfigFile) -> String {
    cli_scheme
        .or_else(|| config.version_scheme().map(|scheme| scheme.to_string()))
        .unwrap_or_else(|| DEFAULT_VERSION_SCHEME.to_string())
}

/// One line per tag, lowest version first, with the latest marked `*`
fn render_ranking(response: &RankResponse) -> String {
    response
        .ranked
        .iter()
        .enumerate()
        .map(|(index, tag)| {
            let marker = if response.latest == Some(index) { '*' } else { ' ' };
            format!(
                "{} {} {} [{}] {}",
                marker,
                tag.identity.name().unwrap_or("-"),
                tag.identity.version().unwrap_or("-"),
                tag.identity
                    .version_scheme()
                    .unwrap_or(VersionScheme::Unknown.as_str()),
                tag.path.display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
