//! Resolution workflow orchestration
//!
//! Turns command-line arguments and file configuration into the immutable
//! [FixVersionConfig] the engine consumes, and prepares the repository it
//! runs against. Kept free of clap so it can be driven programmatically.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{BehaviorConfig, Config, FixVersionConfig};
use crate::domain::ReleaseIdentifierSet;
use crate::git::Git2Repository;

/// Arguments for the resolution workflow
///
/// Mirrors the CLI Args; every `None` falls back to the file configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveArgs {
    /// Commit hash or other reference to look up
    pub commit: Option<String>,

    /// Repository URL to mirror
    pub url: Option<String>,

    /// Remote carrying the release branches
    pub remote: Option<String>,

    /// Development branch name
    pub development_branch: Option<String>,

    /// Release identifiers; entries may hold several space-separated prefixes
    pub release_identifiers: Vec<String>,

    /// Local repository to use instead of a mirror
    pub repo_path: Option<PathBuf>,

    /// Skip fetching the remote
    pub no_fetch: bool,
}

/// Merge command-line arguments over file configuration.
///
/// A missing commit reference stays empty; see [complete_interactively].
pub fn assemble_config(args: &ResolveArgs, file: &Config) -> FixVersionConfig {
    let release_identifiers = if args.release_identifiers.is_empty() {
        ReleaseIdentifierSet::new(&file.release.identifiers)
    } else {
        ReleaseIdentifierSet::new(
            args.release_identifiers
                .iter()
                .flat_map(|entry| entry.split_whitespace()),
        )
    };

    FixVersionConfig {
        commit_ref: args.commit.clone().unwrap_or_default(),
        url: args.url.clone().or_else(|| file.repository.url.clone()),
        remote_name: args
            .remote
            .clone()
            .unwrap_or_else(|| file.repository.remote_name.clone()),
        development_branch: args
            .development_branch
            .clone()
            .unwrap_or_else(|| file.repository.development_branch.clone()),
        release_identifiers,
    }
}

/// Ask for whichever required fields are still empty.
///
/// When every field is already filled in the prompt is never called, so a
/// fully specified invocation runs without interaction.
pub fn complete_interactively<F>(
    mut config: FixVersionConfig,
    mut prompt: F,
) -> Result<FixVersionConfig>
where
    F: FnMut(&str, Option<&str>) -> Result<String>,
{
    if config.commit_ref.trim().is_empty() {
        config.commit_ref = prompt("Commit hash", None)?;
    }
    if config.remote_name.trim().is_empty() {
        config.remote_name = prompt("Remote name", Some("origin"))?;
    }
    if config.release_identifiers.is_empty() {
        let answer = prompt("Release identifiers (space separated)", None)?;
        config.release_identifiers = ReleaseIdentifierSet::from_whitespace_separated(&answer);
    }
    Ok(config)
}

/// Directory name for the mirror of `url`
pub fn mirror_dir_name(url: &str) -> String {
    let trimmed = url.trim_end_matches('/').trim_end_matches(".git");
    let mut name = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
            c
        } else {
            '_'
        };
        if c == '_' && name.ends_with('_') {
            continue;
        }
        name.push(c);
    }
    name.trim_matches('_').to_string()
}

/// Open the repository a resolution runs against and bring it up to date.
///
/// With a URL a bare mirror under the cache directory is used, otherwise the
/// repository around `repo_path` (or the working directory). Fetch failures
/// are fatal. Without `fetch` a mirror is used as last fetched.
pub fn prepare_repository(
    config: &FixVersionConfig,
    behavior: &BehaviorConfig,
    repo_path: Option<&PathBuf>,
    fetch: bool,
) -> Result<Git2Repository> {
    let repo = match &config.url {
        Some(url) => {
            let dir = behavior.mirror_root().join(mirror_dir_name(url));
            info!(url = %url, path = %dir.display(), "using repository mirror");
            Git2Repository::mirror(url, &config.remote_name, &dir)
                .with_context(|| format!("Cannot prepare mirror of '{}'", url))?
        }
        None => {
            let path = repo_path.cloned().unwrap_or_else(|| PathBuf::from("."));
            Git2Repository::open(&path)
                .with_context(|| format!("Not in a git repository: {}", path.display()))?
        }
    };

    if fetch {
        repo.fetch_from_remote(&config.remote_name)?;
    }

    Ok(repo)
}
