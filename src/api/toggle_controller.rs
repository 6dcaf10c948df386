use tracing::{debug, info};

use crate::core::{Scheduler, TimerId};
use crate::dom::{Document, ElementId};
use crate::extensions::PageEvent;
use crate::interaction::toggle::{
    CART_ADDED_MESSAGE, CART_CONFIRMED_CLASS, CART_CONFIRMED_HTML, CART_IDLE_HTML, LOADING_HTML,
    WISHLIST_ACTIVE_CLASS, WISHLIST_ACTIVE_HTML, WISHLIST_ADDED_MESSAGE, WISHLIST_INACTIVE_CLASS,
    WISHLIST_INACTIVE_HTML, WISHLIST_REMOVED_MESSAGE,
};
use crate::interaction::{Severity, ToggleControlState};

use super::{CatalogPage, PageTimer};

impl<D: Document> CatalogPage<D> {
    #[must_use]
    pub fn cart_state(&self, control: ElementId) -> ToggleControlState {
        self.cart.state(control)
    }

    #[must_use]
    pub fn wishlist_state(&self, control: ElementId) -> ToggleControlState {
        ToggleControlState::wishlist_from_document(&self.document, control)
    }

    #[must_use]
    pub fn is_button_loading(&self, button: ElementId) -> bool {
        self.loading.is_loading(button)
    }

    /// Flips a cart control into its confirmation state and arms the revert.
    ///
    /// Clicks while the confirmation is showing are swallowed.
    pub(super) fn handle_cart_click(&mut self, control: ElementId) {
        if self.cart.is_active(control) {
            debug!(control = control.raw(), "cart confirmation already showing");
            return;
        }

        self.document.add_class(control, CART_CONFIRMED_CLASS);
        self.document.set_inner_html(control, CART_CONFIRMED_HTML);
        let revert = self.timers.schedule(
            self.config.cart_revert_delay_ms,
            PageTimer::RevertCart(control),
        );
        self.cart.begin(control, revert);

        info!(control = control.raw(), "cart confirmation shown");
        self.notify(CART_ADDED_MESSAGE, Severity::Success);
        self.emit_page_event(PageEvent::ToggleChanged(self.cart.state(control)));
    }

    pub(super) fn revert_cart(&mut self, control: ElementId, revert: TimerId) {
        if !self.cart.finish(control, revert) {
            return;
        }
        self.document.remove_class(control, CART_CONFIRMED_CLASS);
        self.document.set_inner_html(control, CART_IDLE_HTML);
        debug!(control = control.raw(), "cart confirmation reverted");
        self.emit_page_event(PageEvent::ToggleChanged(self.cart.state(control)));
    }

    pub(super) fn handle_wishlist_click(&mut self, control: ElementId) {
        let next = self.wishlist_state(control).clicked();
        if next.active {
            self.document.remove_class(control, WISHLIST_INACTIVE_CLASS);
            self.document.add_class(control, WISHLIST_ACTIVE_CLASS);
            self.document.set_inner_html(control, WISHLIST_ACTIVE_HTML);
            self.notify(WISHLIST_ADDED_MESSAGE, Severity::Success);
        } else {
            self.document.remove_class(control, WISHLIST_ACTIVE_CLASS);
            self.document.add_class(control, WISHLIST_INACTIVE_CLASS);
            self.document.set_inner_html(control, WISHLIST_INACTIVE_HTML);
            self.notify(WISHLIST_REMOVED_MESSAGE, Severity::Info);
        }
        info!(control = control.raw(), active = next.active, "wishlist toggled");
        self.emit_page_event(PageEvent::ToggleChanged(next));
    }

    pub(super) fn handle_loading_click(&mut self, button: ElementId) {
        if self.loading.is_loading(button) {
            return;
        }
        let original_html = self.document.inner_html(button);
        self.document.set_inner_html(button, LOADING_HTML);
        self.document.set_attribute(button, "disabled", "");
        let restore = self.timers.schedule(
            self.config.loading_restore_delay_ms,
            PageTimer::RestoreLoadingButton(button),
        );
        self.loading.begin(button, original_html, restore);
        self.emit_page_event(PageEvent::LoadingStarted { button });
    }

    pub(super) fn restore_loading_button(&mut self, button: ElementId, restore: TimerId) {
        let Some(original_html) = self.loading.finish(button, restore) else {
            return;
        };
        self.document.set_inner_html(button, &original_html);
        self.document.remove_attribute(button, "disabled");
        self.emit_page_event(PageEvent::LoadingFinished { button });
    }
}
