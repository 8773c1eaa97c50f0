use search_core::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for SearchError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => SearchError::Http(e.to_string()),
            GitHubError::Parse(e) => SearchError::Parse(e.to_string()),
            GitHubError::Api { status, message } => SearchError::Api { status, message },
        }
    }
}
