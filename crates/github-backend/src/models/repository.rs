use serde::{Deserialize, Serialize};

/// Owner of a GitHub repository (minimal representation)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubOwner {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// GitHub repository as returned by the search API.
///
/// Only the fields the UI shows are decoded; everything else is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub owner: GitHubOwner,
    #[serde(default)]
    pub stargazers_count: u64,
    pub language: Option<String>,
}

/// Body of `GET /search/repositories`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GitHubRepoSearchResult {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    /// Absent or `null` decodes to an empty list
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<GitHubRepo>,
}

/// Body GitHub sends alongside non-success statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubErrorBody {
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<GitHubRepo>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<GitHubRepo>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_items_decode_as_empty() {
        let result: GitHubRepoSearchResult = serde_json::from_str("{}").unwrap();
        assert!(result.items.is_empty());

        let result: GitHubRepoSearchResult =
            serde_json::from_str(r#"{"total_count": 0, "items": null}"#).unwrap();
        assert!(result.items.is_empty());
    }

    #[test]
    fn repo_ignores_extra_fields_and_accepts_nulls() {
        let repo: GitHubRepo = serde_json::from_value(serde_json::json!({
            "id": 7,
            "node_id": "R_kgDO",
            "name": "tokio",
            "full_name": "tokio-rs/tokio",
            "description": null,
            "html_url": "https://github.com/tokio-rs/tokio",
            "owner": {"login": "tokio-rs", "id": 1, "avatar_url": "https://a/1"},
            "stargazers_count": 25000,
            "language": null,
            "forks_count": 2000
        }))
        .unwrap();

        assert_eq!(repo.id, 7);
        assert!(repo.description.is_none());
        assert!(repo.language.is_none());
        assert_eq!(repo.owner.avatar_url, "https://a/1");
    }
}
