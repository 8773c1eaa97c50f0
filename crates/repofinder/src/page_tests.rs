//! Unit tests for SearchPage using recording fakes

#[cfg(test)]
mod tests {
    use crate::page::{SearchPage, SubmitOutcome};
    use search_core::{
        Notification, NotificationKind, Notifier, Owner, RepositorySearch, RepositorySummary,
        Result, SearchError,
    };
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Loading(bool),
        Request(String),
        Notified(Notification),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct FakeSearch {
        log: Log,
        responses: RefCell<VecDeque<Result<Vec<RepositorySummary>>>>,
    }

    impl FakeSearch {
        fn new(log: &Log, responses: Vec<Result<Vec<RepositorySummary>>>) -> Self {
            Self {
                log: Rc::clone(log),
                responses: RefCell::new(responses.into()),
            }
        }
    }

    impl RepositorySearch for FakeSearch {
        fn search_repositories(&self, query: &str) -> Result<Vec<RepositorySummary>> {
            self.log.borrow_mut().push(Event::Request(query.to_string()));
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
        }
    }

    struct RecordingNotifier {
        log: Log,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.log.borrow_mut().push(Event::Notified(notification));
        }

        fn loading_changed(&self, is_loading: bool) {
            self.log.borrow_mut().push(Event::Loading(is_loading));
        }
    }

    fn repo(id: u64, name: &str) -> RepositorySummary {
        RepositorySummary {
            id,
            name: name.to_string(),
            full_name: format!("owner/{}", name),
            description: Some(format!("{} description", name)),
            url: format!("https://github.com/owner/{}", name),
            owner: Owner {
                login: "owner".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
            },
            star_count: id,
            language: Some("Rust".to_string()),
        }
    }

    fn requests(log: &Log) -> Vec<String> {
        log.borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Request(q) => Some(q.clone()),
                _ => None,
            })
            .collect()
    }

    fn notifications(log: &Log) -> Vec<Notification> {
        log.borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Notified(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn blank_query_is_rejected_without_request() {
        for query in ["", " ", "\t\n  "] {
            let log = Log::default();
            let search = FakeSearch::new(&log, vec![]);
            let notifier = RecordingNotifier { log: Rc::clone(&log) };
            let mut page = SearchPage::new(&search, &notifier);

            assert_eq!(page.submit_search(query), SubmitOutcome::Rejected);
            assert!(!page.is_loading());
            assert!(page.results().is_empty());
            assert_eq!(
                *log.borrow(),
                vec![Event::Notified(Notification::destructive(
                    "خطأ",
                    "الرجاء إدخال كلمات البحث"
                ))]
            );
        }
    }

    #[test]
    fn blank_query_keeps_previous_results() {
        let log = Log::default();
        let search = FakeSearch::new(&log, vec![Ok(vec![repo(1, "a")])]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        page.submit_search("a");
        assert_eq!(page.submit_search("   "), SubmitOutcome::Rejected);
        assert_eq!(page.results().len(), 1);
        assert_eq!(requests(&log).len(), 1);
    }

    #[test]
    fn successful_search_replaces_results_in_order() {
        let log = Log::default();
        let search = FakeSearch::new(
            &log,
            vec![
                Ok(vec![repo(3, "c"), repo(1, "a"), repo(2, "b")]),
                Ok(vec![repo(9, "z")]),
            ],
        );
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        assert_eq!(page.submit_search("web framework"), SubmitOutcome::Loaded(3));
        let ids: Vec<u64> = page.results().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        assert_eq!(page.submit_search("other"), SubmitOutcome::Loaded(1));
        assert_eq!(page.results()[0].id, 9);
        assert!(notifications(&log).is_empty());
    }

    #[test]
    fn loading_spans_exactly_the_request() {
        let log = Log::default();
        let search = FakeSearch::new(&log, vec![Ok(vec![repo(1, "a")])]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        assert!(!page.is_loading());
        page.submit_search("rust");
        assert!(!page.is_loading());
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Loading(true),
                Event::Request("rust".to_string()),
                Event::Loading(false),
            ]
        );
    }

    #[test]
    fn raw_query_is_forwarded_once() {
        let log = Log::default();
        let search = FakeSearch::new(&log, vec![Ok(vec![])]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        page.submit_search("  c++ & rust ");
        assert_eq!(requests(&log), vec!["  c++ & rust ".to_string()]);
        // The form keeps what was typed
        assert_eq!(page.form().query(), "  c++ & rust ");
    }

    #[test]
    fn empty_result_is_informational() {
        let log = Log::default();
        let search = FakeSearch::new(&log, vec![Ok(vec![repo(1, "a")]), Ok(vec![])]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        page.submit_search("a");
        assert_eq!(page.submit_search("zzzz"), SubmitOutcome::Loaded(0));
        assert!(page.results().is_empty());

        let shown = notifications(&log);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Info);
        assert_eq!(shown[0].title, "لا توجد نتائج");
        assert_eq!(shown[0].description, "لم يتم العثور على مشاريع مطابقة لبحثك");

        // Loading is already off when the notification is shown
        let events = log.borrow();
        assert_eq!(events[events.len() - 2], Event::Loading(false));
    }

    #[test]
    fn api_failure_shows_server_message_and_keeps_results() {
        let log = Log::default();
        let search = FakeSearch::new(
            &log,
            vec![
                Ok(vec![repo(1, "a"), repo(2, "b")]),
                Err(SearchError::Api {
                    status: 403,
                    message: Some("rate limit exceeded".to_string()),
                }),
            ],
        );
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        page.submit_search("first");
        assert_eq!(page.submit_search("second"), SubmitOutcome::Failed);
        assert!(!page.is_loading());
        assert_eq!(page.results().len(), 2);
        assert_eq!(
            notifications(&log),
            vec![Notification::destructive("خطأ في البحث", "rate limit exceeded")]
        );
    }

    #[test]
    fn api_failure_without_message_uses_generic_text() {
        let log = Log::default();
        let search = FakeSearch::new(
            &log,
            vec![Err(SearchError::Api {
                status: 500,
                message: None,
            })],
        );
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        page.submit_search("rust");
        assert_eq!(
            notifications(&log),
            vec![Notification::destructive(
                "خطأ في البحث",
                "حدث خطأ أثناء البحث"
            )]
        );
    }

    #[test]
    fn transport_failure_is_destructive() {
        let log = Log::default();
        let search = FakeSearch::new(
            &log,
            vec![
                Err(SearchError::Http("connection refused".to_string())),
                Err(SearchError::Parse(String::new())),
            ],
        );
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        assert_eq!(page.submit_search("rust"), SubmitOutcome::Failed);
        assert_eq!(page.submit_search("rust"), SubmitOutcome::Failed);

        let shown = notifications(&log);
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|n| n.kind == NotificationKind::Destructive));
        assert_eq!(shown[0].description, "HTTP error: connection refused");
        assert_eq!(
            shown[1].description,
            "حدث خطأ أثناء البحث، حاول مرة أخرى"
        );
        assert!(!page.is_loading());
    }

    #[test]
    fn same_query_twice_renders_the_same() {
        colored::control::set_override(false);

        let log = Log::default();
        let items = vec![repo(1, "a"), repo(2, "b")];
        let search = FakeSearch::new(&log, vec![Ok(items.clone()), Ok(items)]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);

        page.submit_search("same");
        let first = (page.render_text(), page.render_html(&[]));
        page.submit_search("same");
        let second = (page.render_text(), page.render_html(&[]));

        assert_eq!(first, second);
        assert_eq!(requests(&log).len(), 2);
    }

    #[test]
    fn rendered_grid_has_one_card_per_result() {
        colored::control::set_override(false);

        let log = Log::default();
        let search = FakeSearch::new(&log, vec![Ok(vec![repo(7, "x"), repo(8, "y"), repo(9, "z")])]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);
        page.submit_search("xyz");

        let html = page.render_html(&[]);
        assert_eq!(html.matches("<article class=\"card\"").count(), 3);
        let first = html.find("data-key=\"7\"").unwrap();
        let second = html.find("data-key=\"8\"").unwrap();
        let third = html.find("data-key=\"9\"").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains("<h2>نتائج البحث (3)</h2>"));
        assert!(html.contains("value=\"xyz\""));

        let text = page.render_text();
        assert!(text.starts_with("نتائج البحث (3)"));
        assert!(text.contains("[3] z"));
    }

    #[test]
    fn empty_page_renders_only_the_form() {
        let log = Log::default();
        let search = FakeSearch::new(&log, vec![]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let page = SearchPage::new(&search, &notifier);

        assert_eq!(page.render_text(), "");
        let html = page.render_html(&[]);
        assert!(html.contains("<form"));
        assert!(!html.contains("results"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn notifications_render_as_toasts() {
        let log = Log::default();
        let search = FakeSearch::new(&log, vec![]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let page = SearchPage::new(&search, &notifier);

        let html = page.render_html(&[Notification::destructive("خطأ", "<bad>")]);
        assert!(html.contains("<div class=\"toast destructive\" role=\"status\"><strong>خطأ</strong> &lt;bad&gt;</div>"));
    }

    #[test]
    fn json_view_reflects_state() {
        let log = Log::default();
        let search = FakeSearch::new(&log, vec![Ok(vec![repo(1, "a")])]);
        let notifier = RecordingNotifier { log: Rc::clone(&log) };
        let mut page = SearchPage::new(&search, &notifier);
        page.submit_search("a");

        let json = serde_json::to_value(page.view(vec![])).unwrap();
        assert_eq!(json["query"], "a");
        assert_eq!(json["is_loading"], false);
        assert_eq!(json["count"], 1);
        assert_eq!(json["results"][0]["id"], 1);
        assert_eq!(json["results"][0]["owner"]["login"], "owner");
    }
}
