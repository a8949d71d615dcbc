//! Transient user notifications ("toasts").
//!
//! The settings mirror only *requests* a notification through the
//! [`Notifier`] trait; timing and display belong to whichever frontend
//! implements it. [`ToastQueue`] is the stock implementation used by the
//! terminal UI.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long every settings notification stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(2000);

/// Maximum toasts kept at once; the oldest are dropped first.
pub const MAX_TOASTS: usize = 8;

/// A display request for a transient message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Notification {
    /// Build a notification with the standard [`NOTIFICATION_DURATION`].
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration: NOTIFICATION_DURATION,
        }
    }

    pub(crate) fn instructions_saved() -> Self {
        Self::new(
            "Custom Instructions Updated",
            "Custom prompt instructions updated.",
        )
    }

    pub(crate) fn instructions_reset() -> Self {
        Self::new(
            "Custom Instructions Reset",
            "Custom prompt instructions reset.",
        )
    }

    pub(crate) fn style_updated(tag: &str) -> Self {
        Self::new("Style Updated", format!("Domain style updated to {tag}."))
    }
}

/// Fire-and-forget notification service.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Discards every notification.
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// A notification stamped with the instant it was raised.
#[derive(Clone, Debug)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.notification.duration
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

/// Shared, cloneable toast buffer.
///
/// The notifier side pushes; the frontend reads [`visible`](Self::visible)
/// each frame and calls [`prune`](Self::prune) to drop expired entries.
#[derive(Clone, Default)]
pub struct ToastQueue(Arc<Mutex<Vec<Toast>>>);

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification as shown at `now`.
    pub fn push_at(&self, notification: Notification, now: Instant) {
        let mut toasts = self.0.lock().unwrap_or_else(|e| e.into_inner());
        toasts.push(Toast {
            notification,
            shown_at: now,
        });
        if toasts.len() > MAX_TOASTS {
            let excess = toasts.len() - MAX_TOASTS;
            toasts.drain(..excess);
        }
    }

    /// Unexpired toasts at `now`, oldest first.
    pub fn visible(&self, now: Instant) -> Vec<Toast> {
        let toasts = self.0.lock().unwrap_or_else(|e| e.into_inner());
        toasts
            .iter()
            .filter(|t| !t.is_expired(now))
            .cloned()
            .collect()
    }

    /// Drop expired toasts. Returns how many were removed.
    pub fn prune(&self, now: Instant) -> usize {
        let mut toasts = self.0.lock().unwrap_or_else(|e| e.into_inner());
        let before = toasts.len();
        toasts.retain(|t| !t.is_expired(now));
        before - toasts.len()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }
}
