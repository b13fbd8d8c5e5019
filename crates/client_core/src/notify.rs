use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient status message. Dismissal clears `open` but keeps the last
/// message and severity around for display fade-out.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            open: false,
            message: String::new(),
            severity: Severity::Success,
        }
    }
}

struct RelaySlot {
    notification: Notification,
    seq: u64,
}

/// Single-slot, overwrite-on-publish status channel. Each publish arms a
/// fresh auto-dismiss timer; the sequence number keeps a stale timer from
/// dismissing a notification published after it.
pub struct NotificationRelay {
    slot: Mutex<RelaySlot>,
    ttl: Duration,
}

impl NotificationRelay {
    pub fn new() -> Arc<Self> {
        Self::with_ttl(DEFAULT_NOTICE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Arc<Self> {
        Arc::new(Self {
            slot: Mutex::new(RelaySlot {
                notification: Notification::default(),
                seq: 0,
            }),
            ttl,
        })
    }

    pub async fn publish(self: &Arc<Self>, message: impl Into<String>, severity: Severity) {
        let seq = {
            let mut slot = self.slot.lock().await;
            slot.seq += 1;
            slot.notification = Notification {
                open: true,
                message: message.into(),
                severity,
            };
            slot.seq
        };

        let relay = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(relay.ttl).await;
            relay.dismiss_if_current(seq).await;
        });
    }

    pub async fn dismiss(&self) {
        self.slot.lock().await.notification.open = false;
    }

    pub async fn current(&self) -> Notification {
        self.slot.lock().await.notification.clone()
    }

    async fn dismiss_if_current(&self, seq: u64) {
        let mut slot = self.slot.lock().await;
        if slot.seq == seq {
            slot.notification.open = false;
        } else {
            debug!(seq, current = slot.seq, "stale notice timer ignored");
        }
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
