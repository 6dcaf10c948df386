use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::TimerId;
use crate::dom::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Suffix of the `alert-*` class used by the page stylesheet.
    #[must_use]
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub lifetime_ms: u64,
}

/// A notification currently attached to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveNotification {
    pub notification: Notification,
    pub element: ElementId,
    pub removal: TimerId,
}

/// Ownership registry for visible notifications.
///
/// Entries leave the queue exactly once, whichever of auto-removal or manual
/// dismissal claims them first.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    live: IndexMap<NotificationId, LiveNotification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, live: LiveNotification) {
        self.live.insert(live.notification.id, live);
    }

    /// Claims a notification for removal. Returns `None` when it is already gone.
    pub fn take(&mut self, id: NotificationId) -> Option<LiveNotification> {
        self.live.shift_remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&LiveNotification> {
        self.live.get(&id)
    }

    #[must_use]
    pub fn find_by_element(&self, element: ElementId) -> Option<NotificationId> {
        self.live
            .values()
            .find(|live| live.element == element)
            .map(|live| live.notification.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.live.values().map(|live| &live.notification)
    }
}
