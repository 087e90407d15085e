//! Configuration constants and per-invocation settings

use log::debug;

use crate::error::Result;
use crate::gist::{HostResolver, TokenResolver};

/// Configuration constants for the GitHub API
pub mod api {
    /// REST base URL for github.com
    pub const GITHUB_REST_URL: &str = "https://api.github.com";

    /// GraphQL endpoint for github.com
    pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

    /// REST path prefix on GitHub Enterprise Server
    pub const ENTERPRISE_REST_PATH: &str = "/api/v3";

    /// GraphQL path on GitHub Enterprise Server
    pub const ENTERPRISE_GRAPHQL_PATH: &str = "/api/graphql";

    /// Gists endpoint
    pub const GISTS: &str = "gists";

    /// Media type sent in the Accept header
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// REST API version header value
    pub const API_VERSION: &str = "2022-11-28";

    /// Largest page the GraphQL connection accepts
    pub const MAX_PAGE_SIZE: usize = 100;

    /// Number of recent gists offered in the selection prompt
    pub const PROMPT_GIST_LIMIT: usize = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Token environment variables for github.com (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];

    /// Token environment variables for enterprise hosts (checked in order)
    pub const ENTERPRISE_TOKEN_ENV_VARS: &[&str] =
        &["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"];

    /// Overrides the directory holding hosts.yml
    pub const CONFIG_DIR_ENV_VAR: &str = "GH_CONFIG_DIR";

    /// Hosts file name inside the config directory
    pub const HOSTS_FILE: &str = "hosts.yml";

    /// Config directory name under the XDG config home
    pub const DIR_NAME: &str = "gh";
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable for host
    pub const ENV_VAR: &str = "GH_HOST";
}

/// Default values for CLI
pub mod defaults {
    /// Default GitHub host
    pub const HOST: &str = "github.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "GISTCTL_API_URL";
}

/// Settings for a single invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub host (github.com or an enterprise hostname)
    pub host: String,
    /// API token for the host
    pub token: String,
    /// API base URL override, bypasses host-derived URLs
    pub api_url: Option<String>,
}

impl Config {
    /// Resolve host and token from CLI arguments, environment and hosts file
    pub fn load(
        cli_host: Option<&str>,
        cli_token: Option<&str>,
        api_url: Option<&str>,
    ) -> Result<Self> {
        let host = HostResolver::resolve(cli_host);
        let token = TokenResolver::new(&host).resolve(cli_token)?;
        let api_url = api_url
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string);
        debug!(
            "Loaded configuration for host {} (api url override: {:?})",
            host, api_url
        );

        Ok(Self {
            host,
            token,
            api_url,
        })
    }
}

/// True when the host is github.com (or a subdomain alias of it)
pub fn is_github_com(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == defaults::HOST || host.ends_with(".github.com")
}
