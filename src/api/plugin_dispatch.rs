use crate::core::Scheduler;
use crate::dom::Document;
use crate::extensions::{PageContext, PageEvent};

use super::CatalogPage;

impl<D: Document> CatalogPage<D> {
    #[must_use]
    pub fn page_context(&self) -> PageContext {
        PageContext {
            now_ms: self.timers.now_ms(),
            live_notifications: self.notifications.len(),
            watched_images: self.lazy_images.watched_len(),
            scroll: self.scroll.visibility(),
            pending_timers: self.timers.len(),
        }
    }

    pub(super) fn emit_page_event(&mut self, event: PageEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.page_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
