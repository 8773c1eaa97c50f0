use serde::{Deserialize, Serialize};

/// One repository returned by a search.
///
/// Values are never mutated after decoding; a new search replaces the whole
/// result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Unique per repository, used as the render key
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    /// External page of the repository
    pub url: String,
    pub owner: Owner,
    pub star_count: u64,
    pub language: Option<String>,
}

impl RepositorySummary {
    /// Description, treating an empty string the same as a missing one
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Language, treating an empty string the same as a missing one
    pub fn language(&self) -> Option<&str> {
        non_empty(self.language.as_deref())
    }
}

/// Account owning a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Destructive,
}

/// A transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
