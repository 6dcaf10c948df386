use indexmap::{IndexMap, IndexSet};

use super::{Document, ElementId, ScrollBehavior, escape_html};

/// Scroll commands recorded by [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    Top(ScrollBehavior),
    IntoView(ElementId, ScrollBehavior),
}

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: IndexSet<String>,
    attributes: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    inner_html: String,
}

/// In-memory document used by tests and headless hosts.
///
/// It keeps a real element tree so delegated click matching, subtree removal
/// and text extraction behave like a browser document, and it records the
/// side effects (viewport observation, focus, scroll) a browser would perform.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: IndexMap<ElementId, Node>,
    body: ElementId,
    next_id: u64,
    observed: IndexSet<ElementId>,
    focused: Option<ElementId>,
    scroll_requests: Vec<ScrollRequest>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let body = ElementId::new(0);
        let mut nodes = IndexMap::new();
        nodes.insert(
            body,
            Node {
                tag: "body".to_owned(),
                ..Node::default()
            },
        );
        Self {
            nodes,
            body,
            next_id: 1,
            observed: IndexSet::new(),
            focused: None,
            scroll_requests: Vec::new(),
        }
    }

    #[must_use]
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Appends an element carrying `classes` and returns its handle.
    pub fn append(&mut self, parent: ElementId, tag: &str, classes: &[&str]) -> ElementId {
        let element = self.create_element(tag, Some(parent));
        for class in classes {
            self.add_class(element, class);
        }
        element
    }

    #[must_use]
    pub fn classes(&self, element: ElementId) -> Vec<String> {
        self.nodes
            .get(&element)
            .map(|node| node.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.nodes
            .get(&element)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_observed(&self, element: ElementId) -> bool {
        self.observed.contains(&element)
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    #[must_use]
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    fn detach_subtree(&mut self, element: ElementId) {
        let Some(node) = self.nodes.shift_remove(&element) else {
            return;
        };
        self.observed.shift_remove(&element);
        if self.focused == Some(element) {
            self.focused = None;
        }
        for child in node.children {
            self.detach_subtree(child);
        }
    }

    fn collect_text(&self, element: ElementId, out: &mut String) {
        let Some(node) = self.nodes.get(&element) else {
            return;
        };
        out.push_str(&strip_markup(&node.inner_html));
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }
}

impl Document for MemoryDocument {
    fn contains(&self, element: ElementId) -> bool {
        self.nodes.contains_key(&element)
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element).and_then(|node| node.parent)
    }

    fn tag_name(&self, element: ElementId) -> Option<String> {
        self.nodes.get(&element).map(|node| node.tag.clone())
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.nodes
            .get(&element)
            .is_some_and(|node| node.classes.contains(class))
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        if name == "class" {
            let node = self.nodes.get(&element)?;
            return Some(node.classes.iter().cloned().collect::<Vec<_>>().join(" "));
        }
        self.nodes
            .get(&element)
            .and_then(|node| node.attributes.get(name).cloned())
    }

    fn text_content(&self, element: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(element, &mut out);
        out
    }

    fn inner_html(&self, element: ElementId) -> String {
        self.nodes
            .get(&element)
            .map(|node| node.inner_html.clone())
            .unwrap_or_default()
    }

    fn style(&self, element: ElementId, property: &str) -> Option<String> {
        self.nodes
            .get(&element)
            .and_then(|node| node.styles.get(property).cloned())
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.attributes.get("id").is_some_and(|value| value == id))
            .map(|(element, _)| *element)
    }

    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.classes.contains(class))
            .map(|(element, _)| *element)
            .collect()
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.attributes.contains_key(name))
            .map(|(element, _)| *element)
            .collect()
    }

    fn create_element(&mut self, tag: &str, parent: Option<ElementId>) -> ElementId {
        let parent = parent
            .filter(|parent| self.nodes.contains_key(parent))
            .unwrap_or(self.body);
        let element = ElementId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            element,
            Node {
                tag: tag.to_ascii_lowercase(),
                parent: Some(parent),
                ..Node::default()
            },
        );
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(element);
        }
        element
    }

    fn remove_element(&mut self, element: ElementId) -> bool {
        if element == self.body || !self.nodes.contains_key(&element) {
            return false;
        }
        if let Some(parent) = self.parent(element) {
            if let Some(node) = self.nodes.get_mut(&parent) {
                node.children.retain(|child| *child != element);
            }
        }
        self.detach_subtree(element);
        true
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.classes.shift_remove(class);
        }
    }

    fn toggle_class(&mut self, element: ElementId, class: &str) -> bool {
        let Some(node) = self.nodes.get_mut(&element) else {
            return false;
        };
        if node.classes.shift_remove(class) {
            false
        } else {
            node.classes.insert(class.to_owned());
            true
        }
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn remove_attribute(&mut self, element: ElementId, name: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.attributes.shift_remove(name);
        }
    }

    fn set_inner_html(&mut self, element: ElementId, html: &str) {
        let children = match self.nodes.get_mut(&element) {
            Some(node) => {
                node.inner_html = html.to_owned();
                std::mem::take(&mut node.children)
            }
            None => return,
        };
        for child in children {
            self.detach_subtree(child);
        }
    }

    fn set_text_content(&mut self, element: ElementId, text: &str) {
        self.set_inner_html(element, &escape_html(text));
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn observe_viewport(&mut self, element: ElementId) {
        if self.nodes.contains_key(&element) {
            self.observed.insert(element);
        }
    }

    fn unobserve_viewport(&mut self, element: ElementId) {
        self.observed.shift_remove(&element);
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.scroll_requests.push(ScrollRequest::Top(behavior));
    }

    fn scroll_into_view(&mut self, element: ElementId, behavior: ScrollBehavior) {
        self.scroll_requests
            .push(ScrollRequest::IntoView(element, behavior));
    }

    fn focus(&mut self, element: ElementId) {
        if self.nodes.contains_key(&element) {
            self.focused = Some(element);
        }
    }
}

/// Extracts visible text from a markup fragment.
fn strip_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
