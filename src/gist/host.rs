//! Host resolution from multiple sources

use log::debug;

use crate::config::{defaults, host as host_config};

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (GH_HOST)
    /// 3. github.com
    pub fn resolve(cli_host: Option<&str>) -> String {
        if let Some(host) = cli_host.filter(|h| !h.trim().is_empty()) {
            debug!("Using host from CLI argument: {}", host);
            return normalize_host(host);
        }

        if let Ok(host) = std::env::var(host_config::ENV_VAR) {
            if !host.trim().is_empty() {
                debug!(
                    "Using host from {} environment variable: {}",
                    host_config::ENV_VAR,
                    host
                );
                return normalize_host(&host);
            }
        }

        debug!("No host configured, defaulting to {}", defaults::HOST);
        defaults::HOST.to_string()
    }
}

/// Strip scheme and trailing slashes so "https://ghe.example.com/" becomes a bare hostname
fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}
