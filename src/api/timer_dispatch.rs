use tracing::trace;

use crate::core::{Scheduler, TimerId};
use crate::dom::Document;

use super::{CatalogPage, PageTimer};

impl<D: Document> CatalogPage<D> {
    /// Current virtual time of the page clock.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    #[must_use]
    pub fn next_timer_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Advances the clock by `delta_ms`. Returns the number of timers fired.
    pub fn advance_by(&mut self, delta_ms: u64) -> usize {
        let target = self.timers.now_ms().saturating_add(delta_ms);
        self.advance_to(target)
    }

    /// Fires every timer due at or before `now_ms`, in deadline order.
    ///
    /// Timers scheduled by a handler are measured from the handler's own
    /// deadline and fire within the same call when they also fall due.
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some((timer, event)) = self.timers.pop_due(now_ms) {
            trace!(timer = timer.raw(), ?event, at_ms = self.timers.now_ms(), "timer fired");
            self.dispatch_timer(timer, event);
            fired += 1;
        }
        self.timers.advance_clock(now_ms);
        fired
    }

    fn dispatch_timer(&mut self, timer: TimerId, event: PageTimer) {
        match event {
            PageTimer::RemoveNotification(id) => self.expire_notification(id),
            PageTimer::RevertCart(control) => self.revert_cart(control, timer),
            PageTimer::RestoreLoadingButton(button) => self.restore_loading_button(button, timer),
            PageTimer::ScrollHideCheck => self.run_scroll_hide_check(timer),
            PageTimer::ScrollSampleWindow => self.close_scroll_sample_window(timer),
            PageTimer::SearchDebounce(input) => self.fire_search_debounce(input, timer),
        }
    }
}
