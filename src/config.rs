use crate::domain::ReleaseIdentifierSet;
use crate::error::{Result, WhichFixError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "which-fix-version.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".which-fix-version.toml";

/// Represents the complete file configuration for which-fix-version.
///
/// Contains the repository to inspect, how release branches are named, and
/// behavior options. Every value can be overridden from the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_development_branch() -> String {
    "develop".to_string()
}

/// Returns the default release branch prefixes.
fn default_release_identifiers() -> Vec<String> {
    vec!["release/".to_string(), "release-".to_string()]
}

fn default_fetch() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Where the repository lives and which remote carries the release branches.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    /// Remote URL; when set, a bare mirror is kept in the cache directory.
    /// When unset, the repository enclosing the working directory is used.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_remote_name")]
    pub remote_name: String,

    #[serde(default = "default_development_branch")]
    pub development_branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            url: None,
            remote_name: default_remote_name(),
            development_branch: default_development_branch(),
        }
    }
}

/// How release branches are recognized.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_release_identifiers")]
    pub identifiers: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            identifiers: default_release_identifiers(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Fetch the remote before scanning
    #[serde(default = "default_fetch")]
    pub fetch: bool,

    /// Directory holding repository mirrors; defaults to the user cache dir
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            fetch: default_fetch(),
            cache_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl BehaviorConfig {
    /// Directory under which repository mirrors are kept
    pub fn mirror_root(&self) -> PathBuf {
        match &self.cache_dir {
            Some(dir) => dir.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("which-fix-version"),
        }
    }
}

/// Immutable input of one fix-version resolution.
///
/// Assembled once from file configuration, command-line flags and prompts,
/// then handed to the engine unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct FixVersionConfig {
    pub commit_ref: String,
    pub url: Option<String>,
    pub remote_name: String,
    /// Carried for callers; the scan itself does not consult it
    pub development_branch: String,
    pub release_identifiers: ReleaseIdentifierSet,
}

impl FixVersionConfig {
    /// Check that every field the scan depends on is filled in
    pub fn validate(&self) -> Result<()> {
        if self.commit_ref.trim().is_empty() {
            return Err(WhichFixError::config("commit reference is empty"));
        }
        if self.remote_name.trim().is_empty() {
            return Err(WhichFixError::config("remote name is empty"));
        }
        if self.release_identifiers.is_empty() {
            return Err(WhichFixError::config(
                "at least one release identifier is required",
            ));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `which-fix-version.toml` in current directory
/// 3. `.which-fix-version.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path)?;
    toml::from_str(&config_str).map_err(|e| {
        WhichFixError::config(format!("Cannot parse '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(commit: &str, identifiers: &[&str]) -> FixVersionConfig {
        FixVersionConfig {
            commit_ref: commit.to_string(),
            url: None,
            remote_name: "origin".to_string(),
            development_branch: "develop".to_string(),
            release_identifiers: ReleaseIdentifierSet::new(identifiers),
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.repository.remote_name, "origin");
        assert_eq!(config.repository.development_branch, "develop");
        assert_eq!(config.repository.url, None);
        assert_eq!(config.release.identifiers, vec!["release/", "release-"]);
        assert!(config.behavior.fetch);
        assert_eq!(config.behavior.log_level, "warn");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[repository]
url = "https://example.com/acme/widget.git"
"#,
        )
        .unwrap();
        assert_eq!(
            config.repository.url.as_deref(),
            Some("https://example.com/acme/widget.git")
        );
        assert_eq!(config.repository.remote_name, "origin");
        assert_eq!(config.release, ReleaseConfig::default());
    }

    #[test]
    fn test_mirror_root_override() {
        let behavior = BehaviorConfig {
            cache_dir: Some(PathBuf::from("/tmp/mirrors")),
            ..BehaviorConfig::default()
        };
        assert_eq!(behavior.mirror_root(), PathBuf::from("/tmp/mirrors"));
        assert!(BehaviorConfig::default()
            .mirror_root()
            .ends_with("which-fix-version"));
    }

    #[test]
    fn test_validate() {
        assert!(resolution("abc123", &["release/"]).validate().is_ok());
        assert!(resolution("  ", &["release/"]).validate().is_err());
        assert!(resolution("abc123", &[]).validate().is_err());
        assert!(resolution("abc123", &[" "]).validate().is_err());
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = load_config(Some("/definitely/not/here/which-fix-version.toml"));
        assert!(matches!(result, Err(WhichFixError::Io(_))));
    }
}
