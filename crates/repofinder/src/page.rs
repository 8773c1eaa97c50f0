//! The search page: form state, the search lifecycle and result rendering

use colored::Colorize;
use search_core::{Notification, NotificationKind, Notifier, RepositorySearch, RepositorySummary};
use serde::Serialize;
use tracing::{debug, warn};

use crate::card::ProjectCard;
use crate::html::escape;
use crate::strings;

/// The single-field search form. The value is kept after submission.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    query: String,
}

impl SearchForm {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

/// What a submission ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query, nothing was sent
    Rejected,
    /// Results were replaced with this many items
    Loaded(usize),
    /// The request failed; previous results are still shown
    Failed,
}

/// Owns all mutable state of the search screen.
///
/// Submissions take `&mut self`, so a second search cannot start while one
/// is in flight.
pub struct SearchPage<'a> {
    client: &'a dyn RepositorySearch,
    notifier: &'a dyn Notifier,
    form: SearchForm,
    is_loading: bool,
    results: Vec<RepositorySummary>,
}

impl<'a> SearchPage<'a> {
    pub fn new(client: &'a dyn RepositorySearch, notifier: &'a dyn Notifier) -> Self {
        Self {
            client,
            notifier,
            form: SearchForm::default(),
            is_loading: false,
            results: Vec::new(),
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Results of the last successful search, in response order
    pub fn results(&self) -> &[RepositorySummary] {
        &self.results
    }

    /// Type `query` into the form and submit it
    pub fn submit_search(&mut self, query: &str) -> SubmitOutcome {
        self.form.set_query(query);
        self.submit()
    }

    /// Submit the current form value
    pub fn submit(&mut self) -> SubmitOutcome {
        let query = self.form.query().to_string();

        if query.trim().is_empty() {
            self.notifier
                .notify(Notification::destructive(strings::ERROR_TITLE, strings::EMPTY_QUERY));
            return SubmitOutcome::Rejected;
        }

        debug!(query = %query, "submitting search");
        self.set_loading(true);
        let response = self.client.search_repositories(&query);
        self.set_loading(false);

        match response {
            Ok(items) => {
                debug!(count = items.len(), "search succeeded");
                self.results = items;
                if self.results.is_empty() {
                    self.notifier.notify(Notification::info(
                        strings::NO_RESULTS_TITLE,
                        strings::NO_RESULTS,
                    ));
                }
                SubmitOutcome::Loaded(self.results.len())
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                let description = match err.user_message() {
                    Some(message) => message,
                    // A non-success status without a message still gets the plain failure text
                    None if !err.is_transport() => strings::SEARCH_FAILED.to_string(),
                    None => strings::SEARCH_FAILED_RETRY.to_string(),
                };
                self.notifier.notify(Notification::destructive(
                    strings::SEARCH_ERROR_TITLE,
                    description,
                ));
                SubmitOutcome::Failed
            }
        }
    }

    fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
        self.notifier.loading_changed(is_loading);
    }

    // ==================== Rendering ====================

    /// Result section for the terminal; empty when there are no results
    pub fn render_text(&self) -> String {
        if self.results.is_empty() {
            return String::new();
        }

        let mut output = format!(
            "{} ({})",
            strings::RESULTS_HEADER.white().bold(),
            self.results.len()
        );
        for (index, repo) in self.results.iter().enumerate() {
            output.push_str("\n\n");
            output.push_str(&ProjectCard::new(repo).render_text(index + 1));
        }
        output
    }

    /// Page body as HTML, including `notifications` as toasts
    pub fn render_html(&self, notifications: &[Notification]) -> String {
        let button = if self.is_loading {
            format!(
                "<button type=\"submit\" disabled aria-busy=\"true\"><span class=\"spinner\"></span> {}</button>",
                escape(strings::SEARCH_BUTTON_BUSY)
            )
        } else {
            format!(
                "<button type=\"submit\"><span class=\"icon\">&#128269;</span> {}</button>",
                escape(strings::SEARCH_BUTTON)
            )
        };

        let mut body = format!(
            "<header><h1>{title}</h1></header>\n<main>\n\
             <form method=\"get\" action=\"/\">\n<label for=\"query\">{label}</label>\n\
             <input id=\"query\" name=\"q\" placeholder=\"{placeholder}\" value=\"{value}\">\n{button}\n</form>\n",
            title = escape(strings::APP_TITLE),
            label = escape(strings::SEARCH_LABEL),
            placeholder = escape(strings::SEARCH_PLACEHOLDER),
            value = escape(self.form.query()),
            button = button,
        );

        if !self.results.is_empty() {
            body.push_str(&format!(
                "<section class=\"results\">\n<h2>{} ({})</h2>\n<div class=\"grid\">\n",
                escape(strings::RESULTS_HEADER),
                self.results.len()
            ));
            for repo in &self.results {
                body.push_str(&ProjectCard::new(repo).render_html());
                body.push('\n');
            }
            body.push_str("</div>\n</section>\n");
        }
        body.push_str("</main>");

        for notification in notifications {
            let class = match notification.kind {
                NotificationKind::Info => "toast",
                NotificationKind::Destructive => "toast destructive",
            };
            body.push_str(&format!(
                "\n<div class=\"{}\" role=\"status\"><strong>{}</strong> {}</div>",
                class,
                escape(&notification.title),
                escape(&notification.description)
            ));
        }
        body
    }

    /// Serializable snapshot for JSON output
    pub fn view(&self, notifications: Vec<Notification>) -> PageView<'_> {
        PageView {
            query: self.form.query(),
            is_loading: self.is_loading,
            count: self.results.len(),
            results: &self.results,
            notifications,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub query: &'a str,
    pub is_loading: bool,
    pub count: usize,
    pub results: &'a [RepositorySummary],
    pub notifications: Vec<Notification>,
}
