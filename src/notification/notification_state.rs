use std::time::{Duration, Instant};

/// Notification kind - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Short-lived confirmations like "Copied!"
    #[default]
    Info,
    /// Longer-lived warnings like an invalid config file
    Warning,
}

impl NotificationKind {
    fn duration(self) -> Duration {
        match self {
            NotificationKind::Info => Duration::from_millis(1500),
            NotificationKind::Warning => Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    fn new(message: &str, kind: NotificationKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Holds at most one notification; a new one replaces the old.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_info(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationKind::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationKind::Warning));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The notification to render, if any. Expired ones are dropped here
    /// so render code never sees them.
    pub fn active(&mut self) -> Option<&Notification> {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_no_notification() {
        let mut state = NotificationState::new();
        assert!(state.active().is_none());
    }

    #[test]
    fn test_show_info() {
        let mut state = NotificationState::new();
        state.show_info("Copied!");

        let notification = state.active().unwrap();
        assert_eq!(notification.message, "Copied!");
        assert_eq!(notification.kind, NotificationKind::Info);
    }

    #[test]
    fn test_show_warning_replaces_info() {
        let mut state = NotificationState::new();
        state.show_info("Copied!");
        state.show_warning("Invalid config");

        let notification = state.active().unwrap();
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert_eq!(notification.message, "Invalid config");
    }

    #[test]
    fn test_dismiss_clears() {
        let mut state = NotificationState::new();
        state.show_info("Copied!");
        state.dismiss();
        assert!(state.active().is_none());
    }

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let mut state = NotificationState::new();
        state.show_warning("warn");
        assert!(!state.active().unwrap().is_expired());
    }
}
