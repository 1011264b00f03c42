//! Terminal sink for core notifications.

use classgrid_core::notification::{Notification, Notifier, Severity};
use owo_colors::OwoColorize;

/// Prints notifications to stderr, red for destructive ones.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let title = match notification.severity {
            Severity::Destructive => notification.title.red().bold().to_string(),
            Severity::Default => notification.title.bold().to_string(),
        };
        eprintln!("{}", title);
        eprintln!("  {}", notification.description);
    }
}
