use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use which_fix_version::analyzer::{build_catalog, resolve_fix_version};
use which_fix_version::cli::{
    assemble_config, complete_interactively, prepare_repository, ResolveArgs,
};
use which_fix_version::config;
use which_fix_version::ui;
use which_fix_version::{CancellationToken, FixVersionResult, WhichFixError};

const EXIT_ERROR: u8 = 1;
const EXIT_NO_FIXED_VERSION: u8 = 3;
const EXIT_COMMIT_UNKNOWN: u8 = 4;
const EXIT_CANCELLED: u8 = 130;

#[derive(clap::Parser)]
#[command(
    name = "which-fix-version",
    version,
    about = "Find the earliest release that contains a commit"
)]
struct Args {
    #[arg(help = "Commit hash (or any revision) to look up")]
    commit: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Repository URL to mirror and scan")]
    url: Option<String>,

    #[arg(short, long, help = "Remote carrying the release branches")]
    remote: Option<String>,

    #[arg(short = 'd', long = "develop", help = "Development branch name")]
    develop: Option<String>,

    #[arg(
        short = 'i',
        long = "identifier",
        help = "Release branch prefix; repeatable or space separated"
    )]
    identifiers: Vec<String>,

    #[arg(long, help = "Local repository path instead of the current directory")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Do not fetch the remote before scanning")]
    no_fetch: bool,

    #[arg(long, help = "Never prompt for missing values")]
    non_interactive: bool,

    #[arg(long, help = "Show release branches in scan order and exit")]
    list: bool,

    #[arg(short, long, help = "Show every release found to contain the commit")]
    verbose: bool,

    #[arg(long, help = "Log level: error, warn, info, debug, trace")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            let cancelled = e
                .downcast_ref::<WhichFixError>()
                .is_some_and(WhichFixError::is_cancelled);
            if cancelled {
                ui::display_status("Resolution cancelled");
                ExitCode::from(EXIT_CANCELLED)
            } else {
                ui::display_error(&format!("{:#}", e));
                ExitCode::from(EXIT_ERROR)
            }
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let file_config = config::load_config(args.config.as_deref())?;
    init_logging(
        args.log_level
            .as_deref()
            .unwrap_or(&file_config.behavior.log_level),
    );

    let resolve_args = ResolveArgs {
        commit: args.commit.clone(),
        url: args.url.clone(),
        remote: args.remote.clone(),
        development_branch: args.develop.clone(),
        release_identifiers: args.identifiers.clone(),
        repo_path: args.repo.clone(),
        no_fetch: args.no_fetch,
    };

    let mut resolution = assemble_config(&resolve_args, &file_config);
    if !args.non_interactive && !args.list {
        resolution = complete_interactively(resolution, ui::prompt_value)?;
    }
    if args.list {
        if resolution.release_identifiers.is_empty() {
            return Err(WhichFixError::config("at least one release identifier is required").into());
        }
    } else {
        resolution.validate()?;
    }

    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        // A second Ctrl-C aborts even a blocking fetch
        if handler_token.is_cancelled() {
            std::process::exit(i32::from(EXIT_CANCELLED));
        }
        handler_token.cancel();
    })
    .context("Cannot install Ctrl-C handler")?;

    let attended = console::user_attended_stderr();
    let fetch = !resolve_args.no_fetch && file_config.behavior.fetch;

    let mut spinner = ui::ScanSpinner::start(
        &format!("Preparing repository (remote '{}')...", resolution.remote_name),
        attended,
    );
    let repo = prepare_repository(
        &resolution,
        &file_config.behavior,
        resolve_args.repo_path.as_ref(),
        fetch,
    )?;
    spinner.stop();
    if fetch {
        ui::display_success(&format!("Fetched remote '{}'", resolution.remote_name));
    }

    if args.list {
        let catalog = build_catalog(
            &repo,
            &resolution.remote_name,
            &resolution.release_identifiers,
        )?;
        ui::display_catalog(&catalog);
        return Ok(ExitCode::SUCCESS);
    }

    let mut spinner = ui::ScanSpinner::start(
        &format!(
            "Scanning release branches for {}...press Ctrl-C to quit",
            resolution.commit_ref
        ),
        attended,
    );
    let report = resolve_fix_version(&repo, &resolution, &cancel)?;
    spinner.stop();

    ui::display_scan_report(&report, args.verbose);

    Ok(match report.result {
        FixVersionResult::Fixed(_) => ExitCode::SUCCESS,
        FixVersionResult::NoFixedVersion => ExitCode::from(EXIT_NO_FIXED_VERSION),
        FixVersionResult::CommitUnknown => ExitCode::from(EXIT_COMMIT_UNKNOWN),
    })
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
