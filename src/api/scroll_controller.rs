use tracing::debug;

use crate::core::{Scheduler, TimerId};
use crate::dom::{Document, ElementId};
use crate::extensions::PageEvent;
use crate::interaction::{ScrollAction, ScrollVisibility};

use super::{CatalogPage, PageTimer};

impl<D: Document> CatalogPage<D> {
    /// Reports the document's vertical scroll offset.
    ///
    /// Samples are throttled; a sample landing inside an open interval is
    /// evaluated when the interval closes, using the latest offset.
    pub fn scroll(&mut self, offset_px: f64) {
        if let Some(offset) =
            self.scroll_throttle
                .call(&mut self.timers, offset_px, PageTimer::ScrollSampleWindow)
        {
            self.apply_scroll_sample(offset);
        }
    }

    #[must_use]
    pub fn scroll_visibility(&self) -> ScrollVisibility {
        self.scroll.visibility()
    }

    /// The page-level scroll-to-top control created at start.
    #[must_use]
    pub fn scroll_control(&self) -> ElementId {
        self.scroll_control
    }

    pub(super) fn close_scroll_sample_window(&mut self, timer: TimerId) {
        if let Some(offset) =
            self.scroll_throttle
                .fire(timer, &mut self.timers, PageTimer::ScrollSampleWindow)
        {
            self.apply_scroll_sample(offset);
        }
    }

    pub(super) fn run_scroll_hide_check(&mut self, timer: TimerId) {
        if self.scroll.on_hide_check(timer) {
            self.document.set_style(self.scroll_control, "display", "none");
            debug!("scroll control hidden");
            self.emit_page_event(PageEvent::ScrollVisibilityChanged { visible: false });
        }
    }

    fn apply_scroll_sample(&mut self, offset_px: f64) {
        let was_visible = self.scroll.visibility().visible;
        match self.scroll.on_sample(offset_px) {
            ScrollAction::Show => {
                self.document.set_style(self.scroll_control, "display", "block");
                self.document.set_style(self.scroll_control, "opacity", "1");
                if !was_visible {
                    debug!(offset_px, "scroll control shown");
                    self.emit_page_event(PageEvent::ScrollVisibilityChanged { visible: true });
                }
            }
            ScrollAction::FadeOut {
                schedule_hide_check,
            } => {
                self.document.set_style(self.scroll_control, "opacity", "0");
                if schedule_hide_check {
                    let check = self
                        .timers
                        .schedule(self.config.scroll_hide_delay_ms, PageTimer::ScrollHideCheck);
                    if let Some(previous) = self.scroll.arm_hide_check(check) {
                        self.timers.cancel(previous);
                    }
                }
            }
            ScrollAction::Unchanged => {}
        }
    }
}
