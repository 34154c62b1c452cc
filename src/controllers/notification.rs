//! Notifications
//!
//! One transient message per screen. A new message replaces the current one;
//! each message closes itself after a fixed delay unless it was replaced.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Auto-dismiss delay
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

/// Holds the visible notification, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSlot {
    current: Option<(u64, Notification)>,
    next_seq: u64,
}

impl NotificationSlot {
    /// Replace whatever is shown; returns the sequence number to expire later
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.next_seq += 1;
        self.current = Some((self.next_seq, notification));
        self.next_seq
    }

    /// Timer path: only dismisses if `seq` is still the one shown
    pub fn expire(&mut self, seq: u64) -> bool {
        match self.current {
            Some((shown, _)) if shown == seq => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Manual close
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(_, n)| n)
    }
}

/// Reactive handle screens use to raise notifications
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NotificationSlot>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { slot: RwSignal::new(NotificationSlot::default()) }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Notification::error(message));
    }

    pub fn show(&self, notification: Notification) {
        let mut seq = 0;
        self.slot.update(|s| seq = s.show(notification));
        let slot = self.slot;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            slot.try_update(|s| s.expire(seq));
        });
    }

    pub fn close(&self) {
        self.slot.update(|s| s.close());
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot.with(|s| s.current().cloned())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
