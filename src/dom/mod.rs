mod memory_document;

pub use memory_document::{MemoryDocument, ScrollRequest};

use serde::{Deserialize, Serialize};

/// Opaque handle of a host document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Contract implemented by the host document.
///
/// Controllers read and mutate the page exclusively through this trait so
/// interaction logic stays isolated from any concrete DOM binding. Mutations
/// on elements that no longer exist are silently ignored.
pub trait Document {
    fn contains(&self, element: ElementId) -> bool;
    fn parent(&self, element: ElementId) -> Option<ElementId>;
    fn tag_name(&self, element: ElementId) -> Option<String>;
    fn has_class(&self, element: ElementId, class: &str) -> bool;
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;
    fn text_content(&self, element: ElementId) -> String;
    fn inner_html(&self, element: ElementId) -> String;
    fn style(&self, element: ElementId, property: &str) -> Option<String>;

    fn element_by_id(&self, id: &str) -> Option<ElementId>;
    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;
    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId>;

    /// Creates an element appended to `parent`, or to the body when `None`.
    fn create_element(&mut self, tag: &str, parent: Option<ElementId>) -> ElementId;
    /// Detaches an element and its subtree. Returns `false` when absent.
    fn remove_element(&mut self, element: ElementId) -> bool;

    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);
    /// Toggles a class and returns whether it is present afterwards.
    fn toggle_class(&mut self, element: ElementId, class: &str) -> bool;
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);
    fn remove_attribute(&mut self, element: ElementId, name: &str);
    fn set_inner_html(&mut self, element: ElementId, html: &str);
    fn set_text_content(&mut self, element: ElementId, text: &str);
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);

    fn observe_viewport(&mut self, element: ElementId);
    fn unobserve_viewport(&mut self, element: ElementId);

    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
    fn scroll_into_view(&mut self, element: ElementId, behavior: ScrollBehavior);
    fn focus(&mut self, element: ElementId);
}

/// Walks from `element` up through its ancestors.
pub fn ancestors_or_self<D: Document + ?Sized>(
    document: &D,
    element: ElementId,
) -> impl Iterator<Item = ElementId> + '_ {
    std::iter::successors(
        document.contains(element).then_some(element),
        move |current| document.parent(*current),
    )
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
