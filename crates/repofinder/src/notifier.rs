use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use search_core::{Notification, NotificationKind, Notifier};
use std::cell::RefCell;
use std::time::Duration;

use crate::strings;

/// Notifier for the terminal.
///
/// Notifications are kept for structured output and, when `echo` is set,
/// printed to stderr as they arrive. While a search is in flight a spinner
/// stands in for the disabled submit button.
pub struct TerminalNotifier {
    echo: bool,
    spinner: bool,
    active: RefCell<Option<ProgressBar>>,
    shown: RefCell<Vec<Notification>>,
}

impl TerminalNotifier {
    pub fn new(echo: bool, spinner: bool) -> Self {
        Self {
            echo,
            spinner,
            active: RefCell::new(None),
            shown: RefCell::new(Vec::new()),
        }
    }

    /// Notifications received since the last call
    pub fn take_notifications(&self) -> Vec<Notification> {
        self.shown.take()
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        if self.echo {
            eprintln!("{}", format_notification(&notification));
        }
        self.shown.borrow_mut().push(notification);
    }

    fn loading_changed(&self, is_loading: bool) {
        if !self.spinner {
            return;
        }

        let mut active = self.active.borrow_mut();
        if is_loading {
            let bar = ProgressBar::new_spinner();
            bar.set_style(ProgressStyle::default_spinner());
            bar.set_message(strings::SEARCH_BUTTON_BUSY);
            bar.enable_steady_tick(Duration::from_millis(100));
            *active = Some(bar);
        } else if let Some(bar) = active.take() {
            bar.finish_and_clear();
        }
    }
}

/// One-line rendering of a notification
pub fn format_notification(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Info => format!(
            "{} {}",
            format!("{}:", notification.title).cyan().bold(),
            notification.description
        ),
        NotificationKind::Destructive => format!(
            "{} {}",
            format!("{}:", notification.title).red().bold(),
            notification.description
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_notifications_until_taken() {
        let notifier = TerminalNotifier::new(false, false);
        notifier.notify(Notification::info("لا توجد نتائج", "لم يتم العثور على مشاريع مطابقة لبحثك"));
        notifier.loading_changed(true);
        notifier.loading_changed(false);

        let shown = notifier.take_notifications();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Info);
        assert!(notifier.take_notifications().is_empty());
    }

    #[test]
    fn formats_title_and_description() {
        colored::control::set_override(false);
        let line = format_notification(&Notification::destructive("خطأ", "الرجاء إدخال كلمات البحث"));
        assert_eq!(line, "خطأ: الرجاء إدخال كلمات البحث");
    }
}
