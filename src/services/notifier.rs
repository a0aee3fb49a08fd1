//! User feedback surface
//!
//! Alerts block the user's attention (errors, rejected files); notifications
//! are short confirmations that an action went through.

use std::io::Write;

/// Kind of feedback, used for prefixes when printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Alert,
}

impl NotificationType {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Alert => "!",
        }
    }
}

/// Fire-and-forget user feedback
pub trait Notifier {
    /// Show a blocking alert
    fn show_alert(&mut self, title: &str, message: &str);

    /// Show a short success notification
    fn show_notification(&mut self, message: &str);

    /// Dismiss any visible notifications
    fn hide_notifications(&mut self);
}

/// Notifier that prints to the terminal
///
/// Notifications go to stdout, alerts to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    shown: usize,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications printed since the last `hide_notifications`
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl Notifier for ConsoleNotifier {
    fn show_alert(&mut self, title: &str, message: &str) {
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{}] {}", NotificationType::Alert.icon(), title);
        for line in message.lines() {
            let _ = writeln!(err, "    {}", line);
        }
    }

    fn show_notification(&mut self, message: &str) {
        self.shown += 1;
        println!("[{}] {}", NotificationType::Success.icon(), message);
    }

    fn hide_notifications(&mut self) {
        self.shown = 0;
    }
}
