//! App-wide notification slot with timed auto-dismiss

use super::config::config;
use contracts::shared::api_error::ApiError;
use contracts::shared::notification::{NotificationSlot, Severity};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct NotificationService {
    pub slot: RwSignal<NotificationSlot>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::new()),
        }
    }

    /// Show `message`, replacing whatever is visible, and dismiss it after the configured delay
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.show_for(message, severity, config().ui.notification_ms);
    }

    pub fn show_for(&self, message: impl Into<String>, severity: Severity, millis: u32) {
        let mut id = 0;
        self.slot.update(|s| id = s.show(message, severity));
        let slot = self.slot;
        Timeout::new(millis, move || {
            // the slot may belong to a page that is gone by now
            let _ = slot.try_update(|s| s.expire(id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Danger);
    }

    /// Report a failed gateway call with a page-specific prefix
    pub fn api_error(&self, prefix: &str, error: &ApiError) {
        log::error!("{}: {}", prefix, error);
        self.show(format!("{}: {}", prefix, error), error.severity());
    }

    pub fn dismiss(&self) {
        self.slot.update(|s| s.dismiss());
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    expect_context::<NotificationService>()
}
