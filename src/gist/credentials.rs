//! Token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{credentials, is_github_com};
use crate::error::{GistError, Result};

/// Single host entry in hosts.yml
#[derive(Deserialize, Debug)]
struct HostEntry {
    #[serde(default)]
    oauth_token: Option<String>,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (GH_TOKEN, GITHUB_TOKEN, or the enterprise pair)
    /// 3. hosts.yml in the gh config directory
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in self.env_vars() {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying hosts file",
            self.env_vars()
        );
        match Self::hosts_file_path() {
            Some(path) => self.read_from_hosts_file(&path),
            None => Err(GistError::Auth(self.token_not_found_message(None))),
        }
    }

    /// Environment variables consulted for this host
    fn env_vars(&self) -> &'static [&'static str] {
        if is_github_com(&self.host) {
            credentials::TOKEN_ENV_VARS
        } else {
            credentials::ENTERPRISE_TOKEN_ENV_VARS
        }
    }

    /// Read token for this host from a hosts.yml file
    fn read_from_hosts_file(&self, path: &Path) -> Result<String> {
        debug!("Looking for hosts file at: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                return Err(GistError::Auth(self.token_not_found_message(Some(path))));
            }
        };

        let hosts: HashMap<String, HostEntry> = serde_yml::from_str(&content).map_err(|e| {
            GistError::Config(format!(
                "Could not parse hosts file {}: {}",
                path.display(),
                e
            ))
        })?;

        hosts
            .get(&self.host)
            .and_then(|entry| entry.oauth_token.clone())
            .filter(|token| !token.is_empty())
            .map(|token| {
                debug!(
                    "Using token from hosts file {} for host: {}",
                    path.display(),
                    self.host
                );
                token
            })
            .ok_or_else(|| GistError::Auth(self.token_not_found_message(Some(path))))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, hosts_path: Option<&Path>) -> String {
        let env_vars = self.env_vars().join(", ");
        let hosts_info = hosts_path
            .map(|p| format!(" or in hosts file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      gistctl --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. GitHub CLI login:  gh auth login --hostname {}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host,
            self.env_vars()[0],
            self.host,
            env_vars,
            hosts_info
        )
    }

    /// Locate hosts.yml: $GH_CONFIG_DIR, then $XDG_CONFIG_HOME/gh, then ~/.config/gh
    fn hosts_file_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var(credentials::CONFIG_DIR_ENV_VAR) {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir).join(credentials::HOSTS_FILE));
            }
        }

        if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
            if !dir.is_empty() {
                return Some(
                    PathBuf::from(dir)
                        .join(credentials::DIR_NAME)
                        .join(credentials::HOSTS_FILE),
                );
            }
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("GitHub CLI").join(credentials::HOSTS_FILE))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| {
                p.join(".config")
                    .join(credentials::DIR_NAME)
                    .join(credentials::HOSTS_FILE)
            })
        }
    }
}
