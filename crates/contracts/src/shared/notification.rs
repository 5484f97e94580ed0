//! Single-slot notification with replace-on-show semantics

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert alert--success",
            Severity::Info => "alert alert--info",
            Severity::Warning => "alert alert--warning",
            Severity::Danger => "alert alert--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Holds at most one visible notification.
///
/// A newer notification replaces the pending one. Each notification gets a
/// fresh id so that the auto-dismiss timer of a replaced notification cannot
/// clear its successor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing whatever is visible; returns its id
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            message: message.into(),
            severity,
        });
        self.next_id
    }

    /// Timer expiry; only clears the notification it was scheduled for
    pub fn expire(&mut self, id: u64) -> bool {
        match &self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Explicit close by the user
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_notification_replaces_pending_one() {
        let mut slot = NotificationSlot::new();
        let first = slot.show("Saved", Severity::Success);
        let second = slot.show("Failed", Severity::Danger);

        // the first timer fires after it was replaced
        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("Failed"));

        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn dismiss_clears() {
        let mut slot = NotificationSlot::new();
        slot.show("Saved", Severity::Success);
        slot.dismiss();
        assert!(slot.current().is_none());
    }
}
