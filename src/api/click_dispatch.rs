use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::dom::{Document, ElementId, ScrollBehavior};
use crate::extensions::PageEvent;

use super::page_init::FILTERS_COLUMN_CLASS;
use super::{CatalogPage, ClickRoute, RouteMatch};

const FILTERS_SHOWN_CLASS: &str = "show";

/// Result of routing one click through the page runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickOutcome {
    /// Handlers that ran, in routing order.
    pub routes: SmallVec<[ClickRoute; 4]>,
    /// Whether the host must suppress the element's default action.
    pub default_prevented: bool,
}

impl ClickOutcome {
    #[must_use]
    pub fn handled(&self, route: ClickRoute) -> bool {
        self.routes.contains(&route)
    }
}

impl<D: Document> CatalogPage<D> {
    /// Single click entry point.
    ///
    /// Every matching route runs against the element it resolved; routes are
    /// evaluated before any handler mutates the document.
    pub fn click(&mut self, target: ElementId) -> ClickOutcome {
        let matches = self.router.route(&self.document, target);
        let mut outcome = ClickOutcome::default();
        for RouteMatch { route, element } in matches {
            outcome.default_prevented |= self.run_click_route(route, element);
            outcome.routes.push(route);
        }
        if outcome.routes.is_empty() {
            debug!(target = target.raw(), "click not routed");
        }
        outcome
    }

    /// Runs one handler. Returns `true` when the default action is prevented.
    fn run_click_route(&mut self, route: ClickRoute, element: ElementId) -> bool {
        debug!(?route, element = element.raw(), "click routed");
        match route {
            ClickRoute::NotificationDismiss => {
                self.handle_notification_close(element);
                false
            }
            ClickRoute::ScrollToTop => {
                self.document.scroll_to_top(ScrollBehavior::Smooth);
                false
            }
            ClickRoute::CartAdd => {
                self.handle_cart_click(element);
                true
            }
            ClickRoute::WishlistToggle => {
                self.handle_wishlist_click(element);
                true
            }
            ClickRoute::LoadingButton => {
                self.handle_loading_click(element);
                false
            }
            ClickRoute::FilterToggle => {
                self.toggle_filter_panel();
                false
            }
            ClickRoute::InPageAnchor => {
                self.scroll_to_anchor_target(element);
                true
            }
        }
    }

    fn toggle_filter_panel(&mut self) {
        let Some(column) = self
            .document
            .elements_with_class(FILTERS_COLUMN_CLASS)
            .into_iter()
            .next()
        else {
            warn!("filter toggle clicked without a filters column");
            return;
        };
        let shown = self.document.toggle_class(column, FILTERS_SHOWN_CLASS);
        self.emit_page_event(PageEvent::FilterPanelToggled { shown });
    }

    fn scroll_to_anchor_target(&mut self, anchor: ElementId) {
        let Some(href) = self.document.attribute(anchor, "href") else {
            return;
        };
        let fragment = href.trim_start_matches('#');
        if fragment.is_empty() {
            return;
        }
        match self.document.element_by_id(fragment) {
            Some(target) => self
                .document
                .scroll_into_view(target, ScrollBehavior::Smooth),
            None => debug!(fragment, "anchor target missing"),
        }
    }
}
