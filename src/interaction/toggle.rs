use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::TimerId;
use crate::dom::{Document, ElementId};

pub const CART_IDLE_HTML: &str = r#"<i class="fas fa-cart-plus"></i> Cart"#;
pub const CART_CONFIRMED_HTML: &str = r#"<i class="fas fa-check"></i> Added!"#;
pub const CART_CONFIRMED_CLASS: &str = "btn-success";
pub const CART_ADDED_MESSAGE: &str = "Item added to cart! (Demo functionality)";

pub const WISHLIST_ACTIVE_HTML: &str = r#"<i class="fas fa-heart"></i> Saved"#;
pub const WISHLIST_INACTIVE_HTML: &str = r#"<i class="far fa-heart"></i> Save"#;
pub const WISHLIST_ACTIVE_CLASS: &str = "btn-danger";
pub const WISHLIST_INACTIVE_CLASS: &str = "btn-outline-danger";
pub const WISHLIST_ADDED_MESSAGE: &str = "Added to wishlist! (Demo functionality)";
pub const WISHLIST_REMOVED_MESSAGE: &str = "Removed from wishlist";

pub const LOADING_HTML: &str = r#"<span class="loading"></span> Loading..."#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleKind {
    Cart,
    Wishlist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleControlState {
    pub control: ElementId,
    pub kind: ToggleKind,
    pub active: bool,
}

impl ToggleControlState {
    /// Derives the wishlist state from the control's current classes.
    #[must_use]
    pub fn wishlist_from_document<D: Document + ?Sized>(document: &D, control: ElementId) -> Self {
        Self {
            control,
            kind: ToggleKind::Wishlist,
            active: document.has_class(control, WISHLIST_ACTIVE_CLASS),
        }
    }

    /// The state a click moves this control into.
    #[must_use]
    pub fn clicked(self) -> Self {
        match self.kind {
            ToggleKind::Cart => Self {
                active: true,
                ..self
            },
            ToggleKind::Wishlist => Self {
                active: !self.active,
                ..self
            },
        }
    }
}

/// Cart controls currently showing their confirmation, keyed by control.
///
/// A control stays in the map until its revert timer fires; activations
/// during that window are rejected so the revert is never re-armed.
#[derive(Debug, Clone, Default)]
pub struct CartConfirmations {
    active: IndexMap<ElementId, TimerId>,
}

impl CartConfirmations {
    #[must_use]
    pub fn is_active(&self, control: ElementId) -> bool {
        self.active.contains_key(&control)
    }

    #[must_use]
    pub fn state(&self, control: ElementId) -> ToggleControlState {
        ToggleControlState {
            control,
            kind: ToggleKind::Cart,
            active: self.is_active(control),
        }
    }

    pub fn begin(&mut self, control: ElementId, revert: TimerId) {
        self.active.insert(control, revert);
    }

    /// Completes the confirmation owned by `revert`.
    pub fn finish(&mut self, control: ElementId, revert: TimerId) -> bool {
        if self.active.get(&control) == Some(&revert) {
            self.active.shift_remove(&control);
            return true;
        }
        false
    }

    pub fn controls(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.active.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadingEntry {
    original_html: String,
    restore: TimerId,
}

/// Buttons temporarily swapped into a disabled loading state.
#[derive(Debug, Clone, Default)]
pub struct LoadingButtons {
    active: IndexMap<ElementId, LoadingEntry>,
}

impl LoadingButtons {
    #[must_use]
    pub fn is_loading(&self, button: ElementId) -> bool {
        self.active.contains_key(&button)
    }

    pub fn begin(&mut self, button: ElementId, original_html: String, restore: TimerId) {
        self.active.insert(
            button,
            LoadingEntry {
                original_html,
                restore,
            },
        );
    }

    /// Returns the markup to restore when `restore` still owns the button.
    pub fn finish(&mut self, button: ElementId, restore: TimerId) -> Option<String> {
        match self.active.get(&button) {
            Some(entry) if entry.restore == restore => self
                .active
                .shift_remove(&button)
                .map(|entry| entry.original_html),
            _ => None,
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.active.keys().copied()
    }
}
