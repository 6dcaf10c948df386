use tracing::debug;

use crate::core::Scheduler;
use crate::dom::{Document, ElementId, ancestors_or_self};
use crate::extensions::PageEvent;
use crate::interaction::{LiveNotification, Notification, NotificationId, Severity};

use super::event_router::NOTIFICATION_CLOSE_CLASS;
use super::{CatalogPage, PageTimer};

const NOTIFICATION_ANCHOR_STYLES: [(&str, &str); 4] = [
    ("top", "20px"),
    ("right", "20px"),
    ("z-index", "9999"),
    ("min-width", "300px"),
];

impl<D: Document> CatalogPage<D> {
    /// Shows a notification with the configured default lifetime.
    pub fn notify(&mut self, message: &str, severity: Severity) -> NotificationId {
        self.notify_with_lifetime(message, severity, self.config.notification_lifetime_ms)
    }

    /// Shows a notification at the fixed anchor and schedules its removal.
    ///
    /// Notifications stack without a cap; flooding the queue is a caller error.
    pub fn notify_with_lifetime(
        &mut self,
        message: &str,
        severity: Severity,
        lifetime_ms: u64,
    ) -> NotificationId {
        let id = self.notifications.allocate_id();
        let element = self.render_notification(message, severity);
        let removal = self
            .timers
            .schedule(lifetime_ms, PageTimer::RemoveNotification(id));

        self.notifications.insert(LiveNotification {
            notification: Notification {
                id,
                message: message.to_owned(),
                severity,
                lifetime_ms,
            },
            element,
            removal,
        });
        debug!(id = id.raw(), ?severity, lifetime_ms, "notification shown");
        self.emit_page_event(PageEvent::NotificationShown { id, severity });
        id
    }

    /// Removes a notification ahead of its lifetime.
    ///
    /// Returns `false` when it was already removed; repeated dismissal is a no-op.
    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        let Some(live) = self.notifications.take(id) else {
            return false;
        };
        self.timers.cancel(live.removal);
        self.document.remove_element(live.element);
        debug!(id = id.raw(), "notification dismissed");
        self.emit_page_event(PageEvent::NotificationRemoved { id, dismissed: true });
        true
    }

    #[must_use]
    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.get(id).map(|live| &live.notification)
    }

    #[must_use]
    pub fn notification_element(&self, id: NotificationId) -> Option<ElementId> {
        self.notifications.get(id).map(|live| live.element)
    }

    #[must_use]
    pub fn live_notification_count(&self) -> usize {
        self.notifications.len()
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub(super) fn handle_notification_close(&mut self, close_button: ElementId) -> bool {
        let owner = ancestors_or_self(&self.document, close_button)
            .find_map(|element| self.notifications.find_by_element(element));
        match owner {
            Some(id) => self.dismiss_notification(id),
            None => false,
        }
    }

    pub(super) fn expire_notification(&mut self, id: NotificationId) {
        if let Some(live) = self.notifications.take(id) {
            self.document.remove_element(live.element);
            debug!(id = id.raw(), "notification expired");
            self.emit_page_event(PageEvent::NotificationRemoved {
                id,
                dismissed: false,
            });
        }
    }

    fn render_notification(&mut self, message: &str, severity: Severity) -> ElementId {
        let element = self.document.create_element("div", None);
        let severity_class = format!("alert-{}", severity.css_suffix());
        for class in [
            "alert",
            severity_class.as_str(),
            "alert-dismissible",
            "fade",
            "show",
            "position-fixed",
        ] {
            self.document.add_class(element, class);
        }
        self.document.set_attribute(element, "role", "alert");
        for (property, value) in NOTIFICATION_ANCHOR_STYLES {
            self.document.set_style(element, property, value);
        }
        self.document.set_text_content(element, message);

        let close = self.document.create_element("button", Some(element));
        self.document.add_class(close, NOTIFICATION_CLOSE_CLASS);
        self.document.set_attribute(close, "type", "button");
        self.document.set_attribute(close, "data-bs-dismiss", "alert");
        element
    }
}
