//! GitHub HTTP client for gist API interactions

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::{api, Config};
use crate::error::{GistError, Result};

/// Build the shared HTTP client with connection and timeout settings
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("gistctl/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| GistError::Client(e.to_string()))
}

/// GitHub gist API client
pub struct GistClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl GistClient {
    /// Create a client from an HTTP client and resolved settings
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            token: config.token.clone(),
            host: config.host.clone(),
            base_url_override: config
                .api_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    /// Host this client talks to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Build the REST base URL
    pub(crate) fn rest_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        if crate::config::is_github_com(&self.host) {
            api::GITHUB_REST_URL.to_string()
        } else {
            format!("https://{}{}", self.host, api::ENTERPRISE_REST_PATH)
        }
    }

    /// Build the GraphQL endpoint URL
    pub(crate) fn graphql_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return format!("{}/graphql", url);
        }
        if crate::config::is_github_com(&self.host) {
            api::GITHUB_GRAPHQL_URL.to_string()
        } else {
            format!("https://{}{}", self.host, api::ENTERPRISE_GRAPHQL_PATH)
        }
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", api::ACCEPT)
            .header("X-GitHub-Api-Version", api::API_VERSION)
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("POST {}", url);
        self.with_headers(self.client.post(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("DELETE {}", url);
        self.with_headers(self.client.delete(url))
    }
}

#[cfg(test)]
impl GistClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        let config = Config {
            host: "github.com".to_string(),
            token: "test-token".to_string(),
            api_url: Some(base_url.to_string()),
        };
        Self::new(Client::new(), &config)
    }
}
