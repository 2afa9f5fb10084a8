use dialoguer::console::{style, Term};

use common::notify::{Level, Notification, Notifier};

/// Prints notifications on stderr, one titled line each.
#[derive(Debug)]
pub struct ConsoleNotifier {
    term: Term,
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

pub fn format(notification: &Notification) -> String {
    let (marker, title) = match notification.level {
        Level::Success => (
            style("  ✓").green(),
            style(notification.title.as_str()).green().bold(),
        ),
        Level::Error => (
            style("  ✗").red(),
            style(notification.title.as_str()).red().bold(),
        ),
    };
    if notification.description.is_empty() {
        format!("{} {}", marker, title)
    } else {
        format!("{} {}: {}", marker, title, notification.description)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug! {level = ?notification.level, title = %notification.title, "Notification"};
        if let Err(error) = self.term.write_line(&format(&notification)) {
            tracing::warn! {%error, "Could not print notification"};
        }
    }
}
