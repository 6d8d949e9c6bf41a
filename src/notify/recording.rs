//! Recording notifier for tests.

use super::{Notification, Notifier};
use std::sync::{Arc, Mutex, PoisonError};

/// Notifier that keeps every notification it receives.
///
/// Clones share the same buffer, so a test can hand one clone to a store
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }

    pub fn clear(&self) {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).push(notification);
    }
}
