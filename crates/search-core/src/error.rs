use thiserror::Error;

/// Common errors for all repository search backends
#[derive(Error, Debug)]
pub enum SearchError {
    /// The server answered with a non-success status.
    /// `message` is the server-provided explanation, when the body carried one.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl SearchError {
    /// Text suitable for a user-facing notification.
    ///
    /// For API errors this is the server message alone, without the status
    /// prefix. Returns `None` when there is nothing meaningful to show, so the
    /// caller can fall back to a generic message.
    pub fn user_message(&self) -> Option<String> {
        let message = match self {
            SearchError::Api { message, .. } => message.clone()?,
            SearchError::Http(detail) | SearchError::Parse(detail) => {
                if detail.trim().is_empty() {
                    return None;
                }
                self.to_string()
            }
        };
        let message = message.trim();
        if message.is_empty() {
            None
        } else {
            Some(message.to_string())
        }
    }

    /// True for failures that never produced a well-formed server response
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Http(_) | SearchError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
