//! One-way user notifications.
//!
//! The core never raises these itself; callers map rejected commits to a
//! [`Notification`] and hand it to whatever [`Notifier`] the front end uses.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::error::ClassGridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: &str, description: &str, severity: Severity) -> Self {
        Notification {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        }
    }

    pub fn schedule_conflict() -> Self {
        Self::new(
            "Schedule Conflict",
            "This schedule conflicts with an existing schedule. Please choose a different time or day.",
            Severity::Destructive,
        )
    }

    pub fn invalid_time_range() -> Self {
        Self::new(
            "Invalid Time Range",
            "End time must be after start time",
            Severity::Destructive,
        )
    }

    /// A picked time outside the offered choices. `message` says which one.
    pub fn time_not_offered(message: &str) -> Self {
        Self::new("Invalid Time", message, Severity::Destructive)
    }

    /// The notification a failed commit should raise, if any.
    ///
    /// Only user-correctable rejections notify; storage and lookup failures
    /// are reported as plain errors.
    pub fn for_error(error: &ClassGridError) -> Option<Self> {
        match error {
            ClassGridError::Conflict(_) => Some(Self::schedule_conflict()),
            ClassGridError::InvalidTimeRange(_) => Some(Self::invalid_time_range()),
            ClassGridError::TimeNotOffered(message) => Some(Self::time_not_offered(message)),
            _ => None,
        }
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Keeps every notification it receives. Handy in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.borrow_mut().push(notification);
    }
}
