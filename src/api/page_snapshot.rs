use serde::{Deserialize, Serialize};

use crate::core::Scheduler;
use crate::dom::{Document, ElementId};
use crate::interaction::{LazyImagePhase, NotificationId, ScrollVisibility, Severity};

use super::CatalogPage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSnapshot {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub lifetime_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazyImageSnapshot {
    pub element: ElementId,
    pub phase: LazyImagePhase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInputSnapshot {
    pub input: ElementId,
    pub generation: u64,
    /// Query carried by the most recently issued suggestion request.
    #[serde(default)]
    pub last_issued_query: Option<String>,
    pub pending_debounce: bool,
    pub suggestions_rendered: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub now_ms: u64,
    pub pending_timers: usize,
    pub notifications: Vec<NotificationSnapshot>,
    pub active_cart_controls: Vec<ElementId>,
    pub loading_buttons: Vec<ElementId>,
    pub images: Vec<LazyImageSnapshot>,
    pub scroll: ScrollVisibility,
    pub search_inputs: Vec<SearchInputSnapshot>,
}

impl<D: Document> CatalogPage<D> {
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            now_ms: self.timers.now_ms(),
            pending_timers: self.timers.len(),
            notifications: self
                .notifications
                .iter()
                .map(|notification| NotificationSnapshot {
                    id: notification.id,
                    message: notification.message.clone(),
                    severity: notification.severity,
                    lifetime_ms: notification.lifetime_ms,
                })
                .collect(),
            active_cart_controls: self.cart.controls().collect(),
            loading_buttons: self.loading.buttons().collect(),
            images: self
                .lazy_images
                .entries()
                .map(|(element, phase)| LazyImageSnapshot { element, phase })
                .collect(),
            scroll: self.scroll.visibility(),
            search_inputs: self
                .search_inputs
                .iter()
                .map(|(input, state)| SearchInputSnapshot {
                    input: *input,
                    generation: state.generation(),
                    last_issued_query: state.last_issued_query().map(str::to_owned),
                    pending_debounce: state.debouncer().is_pending(),
                    suggestions_rendered: state.suggestion_list().is_some(),
                })
                .collect(),
        }
    }
}
