use tracing::debug;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const DEFAULT_USER_AGENT: &str = concat!("repofinder/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API client for repository search.
///
/// Requests are anonymous. No timeout is configured here; the transport
/// defaults apply.
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    user_agent: String,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the User-Agent header sent with every request
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the search URL with `query` percent-encoded as the sole parameter
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/repositories?q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Try to read error body
        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // GitHub error bodies carry an optional "message"; anything else is dropped
        let message = serde_json::from_str::<GitHubErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        Err(GitHubError::Api { status, message })
    }

    // ==================== Search Operations ====================

    /// Search public repositories using GitHub search syntax.
    ///
    /// Issues exactly one GET request. Items keep the order GitHub returned.
    pub fn search_repositories(&self, query: &str) -> Result<GitHubRepoSearchResult> {
        let url = self.search_url(query);
        debug!(%url, "searching repositories");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", &self.user_agent)
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        let body = response.body_mut().read_to_string()?;
        let result: GitHubRepoSearchResult = serde_json::from_str(&body)?;

        debug!(
            total_count = result.total_count,
            returned = result.items.len(),
            "search resolved"
        );
        Ok(result)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}
