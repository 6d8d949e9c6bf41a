//! User-visible notifications.
//!
//! Store operations surface short "toast" messages (connected, failed,
//! disconnected). The [`Notifier`] trait keeps the stores independent of
//! whatever presentation layer shows them.

pub mod recording;

pub use recording::RecordingNotifier;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Failure the user should act on.
    Destructive,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    /// Informational notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// Failure notification.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that writes to the tracing log.
///
/// Used by the CLI, where the log is the user-visible surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => {
                tracing::info!(title = %notification.title, "{}", notification.description)
            }
            NotificationVariant::Destructive => {
                tracing::warn!(title = %notification.title, "{}", notification.description)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors() {
        let info = Notification::info("Wallet Connected!", "Connected to 7xKX...gAsU");
        assert_eq!(info.variant, NotificationVariant::Default);
        assert_eq!(info.title, "Wallet Connected!");

        let failed = Notification::destructive("Connection Failed", "Please try again");
        assert_eq!(failed.variant, NotificationVariant::Destructive);
    }

    #[test]
    fn test_tracing_notifier_does_not_panic() {
        TracingNotifier.notify(Notification::info("a", "b"));
        TracingNotifier.notify(Notification::destructive("c", "d"));
    }
}
