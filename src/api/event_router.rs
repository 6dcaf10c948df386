use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::dom::{Document, ElementId, ancestors_or_self};

pub const BUTTON_CLASS: &str = "btn";
pub const NOTIFICATION_CLOSE_CLASS: &str = "btn-close";
pub const LOADING_ATTRIBUTE: &str = "data-loading";
pub const FILTER_TOGGLE_ID: &str = "filterToggle";

/// Named click handlers owned by the page runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickRoute {
    NotificationDismiss,
    ScrollToTop,
    CartAdd,
    WishlistToggle,
    LoadingButton,
    FilterToggle,
    InPageAnchor,
}

/// Predicate resolving a click target to the element a handler acts on.
///
/// Matchers are evaluated against the document at click time, so controls
/// inserted after page start are routed like the original markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickMatcher {
    /// Nearest `.btn` ancestor-or-self whose text contains any keyword.
    ButtonText(Vec<String>),
    /// Nearest `.btn` ancestor-or-self carrying the attribute.
    ButtonAttribute(String),
    /// Nearest ancestor-or-self carrying the class.
    ClosestClass(String),
    /// Nearest ancestor-or-self whose `id` attribute equals the value.
    ClosestId(String),
    /// A specific element or any of its descendants.
    Element(ElementId),
    /// Nearest `<a>` whose `href` starts with `#`.
    HashAnchor,
}

impl ClickMatcher {
    #[must_use]
    pub fn button_text(keywords: &[&str]) -> Self {
        Self::ButtonText(keywords.iter().map(|k| (*k).to_owned()).collect())
    }

    pub fn resolve<D: Document + ?Sized>(&self, document: &D, target: ElementId) -> Option<ElementId> {
        let mut chain = ancestors_or_self(document, target);
        match self {
            Self::ButtonText(keywords) => chain.find(|el| {
                if !document.has_class(*el, BUTTON_CLASS) {
                    return false;
                }
                let text = document.text_content(*el);
                keywords.iter().any(|keyword| text.contains(keyword.as_str()))
            }),
            Self::ButtonAttribute(name) => chain.find(|el| {
                document.has_class(*el, BUTTON_CLASS) && document.attribute(*el, name).is_some()
            }),
            Self::ClosestClass(class) => chain.find(|el| document.has_class(*el, class)),
            Self::ClosestId(id) => {
                chain.find(|el| document.attribute(*el, "id").as_deref() == Some(id.as_str()))
            }
            Self::Element(element) => chain.find(|el| el == element),
            Self::HashAnchor => chain.find(|el| {
                document.tag_name(*el).as_deref() == Some("a")
                    && document
                        .attribute(*el, "href")
                        .is_some_and(|href| href.starts_with('#'))
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: ClickRoute,
    pub element: ElementId,
}

/// Single click entry point dispatching to named handlers by predicate.
///
/// Every matching route fires, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ClickRouter {
    routes: Vec<(ClickRoute, ClickMatcher)>,
}

impl ClickRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes installed by the page runtime.
    #[must_use]
    pub fn with_default_routes(scroll_control: ElementId) -> Self {
        let mut router = Self::new();
        router.register(
            ClickRoute::NotificationDismiss,
            ClickMatcher::ClosestClass(NOTIFICATION_CLOSE_CLASS.to_owned()),
        );
        router.register(ClickRoute::ScrollToTop, ClickMatcher::Element(scroll_control));
        router.register(ClickRoute::CartAdd, ClickMatcher::button_text(&["Cart"]));
        router.register(
            ClickRoute::WishlistToggle,
            ClickMatcher::button_text(&["Wishlist", "Save"]),
        );
        router.register(
            ClickRoute::LoadingButton,
            ClickMatcher::ButtonAttribute(LOADING_ATTRIBUTE.to_owned()),
        );
        router.register(
            ClickRoute::FilterToggle,
            ClickMatcher::ClosestId(FILTER_TOGGLE_ID.to_owned()),
        );
        router.register(ClickRoute::InPageAnchor, ClickMatcher::HashAnchor);
        router
    }

    /// Installs a route, replacing the matcher of an existing one in place.
    pub fn register(&mut self, route: ClickRoute, matcher: ClickMatcher) {
        match self.routes.iter_mut().find(|(existing, _)| *existing == route) {
            Some(entry) => entry.1 = matcher,
            None => self.routes.push((route, matcher)),
        }
    }

    pub fn unregister(&mut self, route: ClickRoute) -> bool {
        let before = self.routes.len();
        self.routes.retain(|(existing, _)| *existing != route);
        self.routes.len() != before
    }

    #[must_use]
    pub fn matcher(&self, route: ClickRoute) -> Option<&ClickMatcher> {
        self.routes
            .iter()
            .find(|(existing, _)| *existing == route)
            .map(|(_, matcher)| matcher)
    }

    pub fn routes(&self) -> impl Iterator<Item = ClickRoute> + '_ {
        self.routes.iter().map(|(route, _)| *route)
    }

    pub fn route<D: Document + ?Sized>(
        &self,
        document: &D,
        target: ElementId,
    ) -> SmallVec<[RouteMatch; 4]> {
        self.routes
            .iter()
            .filter_map(|(route, matcher)| {
                matcher.resolve(document, target).map(|element| RouteMatch {
                    route: *route,
                    element,
                })
            })
            .collect()
    }
}
