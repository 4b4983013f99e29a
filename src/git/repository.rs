use crate::domain::BranchRef;
use crate::error::{Result, WhichFixError};
use git2::{BranchType, ErrorCode, Oid, Repository as Git2Repo};
use std::path::Path;
use tracing::{debug, info};

/// Shortest hex prefix libgit2 accepts as an abbreviated object id
const MIN_ABBREV_LEN: usize = 4;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Open, or initialize, a bare mirror of `url` under `dir`.
    ///
    /// The mirror carries a single remote named `remote` pointing at `url`;
    /// an existing remote with a different URL is repointed. Nothing is
    /// fetched here, see [Git2Repository::fetch_from_remote].
    pub fn mirror<P: AsRef<Path>>(url: &str, remote: &str, dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let repo = if dir.join("HEAD").exists() {
            Git2Repo::open_bare(dir)?
        } else {
            std::fs::create_dir_all(dir)?;
            info!(path = %dir.display(), "initializing repository mirror");
            Git2Repo::init_bare(dir)?
        };

        match repo.find_remote(remote) {
            Ok(existing) => {
                if existing.url() != Some(url) {
                    debug!(remote, url, "repointing mirror remote");
                    repo.remote_set_url(remote, url)?;
                }
            }
            Err(e) if e.code() == ErrorCode::NotFound => {
                repo.remote(remote, url)?;
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Git2Repository { repo })
    }

    /// Fetch every branch of `remote` into `refs/remotes/<remote>/*`.
    ///
    /// Tracking branches deleted on the remote are pruned.
    ///
    /// Supports SSH authentication via SSH keys from ~/.ssh/, the SSH agent,
    /// or default credentials.
    pub fn fetch_from_remote(&self, remote_name: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name).map_err(|e| {
            WhichFixError::remote(format!("Cannot find remote '{}': {}", remote_name, e))
        })?;

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks());
        fetch_options.prune(git2::FetchPrune::On);

        let refspec_heads = format!("+refs/heads/*:refs/remotes/{}/*", remote_name);
        info!(remote = remote_name, "fetching release branches");
        remote
            .fetch(&[refspec_heads.as_str()], Some(&mut fetch_options), None)
            .map_err(|e| {
                WhichFixError::remote(format!(
                    "Failed to fetch from remote '{}': {}",
                    remote_name, e
                ))
            })?;

        Ok(())
    }
}

/// Credential callbacks: SSH keys from ~/.ssh, then the SSH agent, then defaults
fn remote_callbacks<'a>() -> git2::RemoteCallbacks<'a> {
    let mut callbacks = git2::RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(git2::CredentialType::SSH_KEY) {
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }

            if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        git2::Cred::default()
    });
    callbacks
}

impl super::Repository for Git2Repository {
    fn list_remote_branches(&self, remote: &str) -> Result<Vec<String>> {
        let prefix = format!("{}/", remote);
        let mut names = Vec::new();

        for entry in self.repo.branches(Some(BranchType::Remote))? {
            let (branch, _) = entry?;
            let Some(name) = branch.name()? else {
                continue;
            };
            if let Some(short) = name.strip_prefix(&prefix) {
                if short != "HEAD" {
                    names.push(short.to_string());
                }
            }
        }

        debug!(remote, branches = names.len(), "listed remote branches");
        Ok(names)
    }

    fn resolve_root_commit(&self, commit_ref: &str) -> Result<Option<Oid>> {
        let commit_ref = commit_ref.trim();
        if commit_ref.is_empty() {
            return Ok(None);
        }

        let object = match self.repo.revparse_single(commit_ref) {
            Ok(object) => object,
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                return Ok(None)
            }
            // Too short to be an object id and not a reference either
            Err(e) if e.code() == ErrorCode::Ambiguous && commit_ref.len() < MIN_ABBREV_LEN => {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };

        // Trees and blobs are objects too, but only commits have ancestry
        match object.peel_to_commit() {
            Ok(commit) => Ok(Some(commit.id())),
            Err(e)
                if matches!(
                    e.code(),
                    ErrorCode::NotFound | ErrorCode::InvalidSpec | ErrorCode::Peel
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn is_commit_present_on_branch(&self, commit: Oid, branch: &BranchRef) -> Result<bool> {
        let reference = self.repo.find_reference(&branch.full_ref()).map_err(|e| {
            WhichFixError::branch(format!("Cannot find branch '{}': {}", branch, e))
        })?;
        let tip = reference.peel_to_commit()?.id();

        if tip == commit {
            return Ok(true);
        }

        Ok(self.repo.graph_descendant_of(tip, commit)?)
    }
}
