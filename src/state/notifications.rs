//! Transient toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tone of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Failure,
}

/// The single message a form produces for one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn level(&self) -> ToastLevel {
        match self {
            Notice::Success(_) => ToastLevel::Success,
            Notice::Failure(_) => ToastLevel::Failure,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Failure(m) => m,
        }
    }
}

/// A notification on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    /// How long the slide-in takes
    const SLIDE_IN: Duration = Duration::from_millis(200);

    /// Slide-in progress in 0.0..=1.0, eased
    pub fn slide_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let linear = (elapsed.as_secs_f32() / Self::SLIDE_IN.as_secs_f32()).min(1.0);
        simple_easing::cubic_out(linear)
    }
}

/// Queue of toasts, newest last. Never takes keyboard focus.
#[derive(Debug, Clone)]
pub struct Notifier {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIFETIME)
    }
}

impl Notifier {
    pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(4);
    /// Older toasts are dropped once this many are queued
    const MAX_QUEUED: usize = 5;

    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
        }
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn notify_failure(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Failure, message.into());
    }

    /// Show a form's notice
    pub fn present(&mut self, notice: Notice) {
        match notice.level() {
            ToastLevel::Success => self.notify_success(notice.message()),
            ToastLevel::Failure => self.notify_failure(notice.message()),
        }
    }

    fn push(&mut self, level: ToastLevel, message: String) {
        tracing::debug!(?level, %message, "toast");
        self.toasts.push_back(Toast {
            level,
            message,
            shown_at: Instant::now(),
        });
        while self.toasts.len() > Self::MAX_QUEUED {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts older than the configured lifetime
    pub fn prune_expired(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < lifetime);
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_routes_by_level() {
        let mut notifier = Notifier::default();
        notifier.present(Notice::Success("Message sent!".to_string()));
        notifier.present(Notice::Failure("Failed to send message.".to_string()));

        let levels: Vec<_> = notifier.toasts().map(|t| t.level).collect();
        assert_eq!(levels, vec![ToastLevel::Success, ToastLevel::Failure]);
    }

    #[test]
    fn test_prune_expired() {
        let mut notifier = Notifier::new(Duration::from_secs(4));
        notifier.notify_success("hello");
        let shown = notifier.toasts().next().unwrap().shown_at;

        notifier.prune_expired(shown + Duration::from_secs(3));
        assert_eq!(notifier.len(), 1);

        notifier.prune_expired(shown + Duration::from_secs(4));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut notifier = Notifier::default();
        for i in 0..8 {
            notifier.notify_failure(format!("toast {i}"));
        }
        assert_eq!(notifier.len(), 5);
        assert_eq!(notifier.toasts().next().unwrap().message, "toast 3");
    }

    #[test]
    fn test_slide_progress_reaches_one() {
        let mut notifier = Notifier::default();
        notifier.notify_success("hi");
        let toast = notifier.toasts().next().unwrap();

        assert_eq!(toast.slide_progress(toast.shown_at), 0.0);
        let done = toast.slide_progress(toast.shown_at + Duration::from_secs(1));
        assert!((done - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_notice_accessors() {
        let notice = Notice::Failure("nope".to_string());
        assert_eq!(notice.level(), ToastLevel::Failure);
        assert_eq!(notice.message(), "nope");
    }
}
