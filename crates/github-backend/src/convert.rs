//! Model conversions from GitHub types to search-core types

use search_core::{Owner, RepositorySummary};

use crate::models::*;

/// Convert a GitHub search hit to a search-core RepositorySummary
pub fn github_repo_to_core(repo: GitHubRepo) -> RepositorySummary {
    RepositorySummary {
        id: repo.id,
        name: repo.name,
        full_name: repo.full_name,
        description: repo.description,
        url: repo.html_url,
        owner: Owner {
            login: repo.owner.login,
            avatar_url: repo.owner.avatar_url,
        },
        star_count: repo.stargazers_count,
        language: repo.language,
    }
}
