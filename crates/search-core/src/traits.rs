use crate::error::Result;
use crate::models::{Notification, RepositorySummary};

/// A remote service that can search repositories by keyword.
///
/// Implementations issue exactly one request per call. They do not retry,
/// page or cache.
pub trait RepositorySearch {
    /// Search repositories matching `query`.
    ///
    /// `query` is passed as typed by the user; encoding it for the wire is
    /// the implementation's job. Results keep the order of the response.
    fn search_repositories(&self, query: &str) -> Result<Vec<RepositorySummary>>;
}

/// Capability for showing transient messages to the user
pub trait Notifier {
    fn notify(&self, notification: Notification);

    /// Called when a search starts and when it resolves.
    /// Default implementation ignores the change.
    fn loading_changed(&self, is_loading: bool) {
        let _ = is_loading;
    }
}
