//! Implementation of search-core traits for GitHubClient

use search_core::{RepositorySearch, RepositorySummary, Result, SearchError};

use crate::client::GitHubClient;
use crate::convert::github_repo_to_core;

impl RepositorySearch for GitHubClient {
    fn search_repositories(&self, query: &str) -> Result<Vec<RepositorySummary>> {
        let result = self
            .search_repositories(query)
            .map_err(SearchError::from)?;

        Ok(result.items.into_iter().map(github_repo_to_core).collect())
    }
}
