use catalog_rs::api::{
    CatalogPage, ClickMatcher, ClickRoute, ClickRouter, FILTER_TOGGLE_ID, FILTERS_COLUMN_CLASS,
    PageConfig,
};
use catalog_rs::dom::{Document, ElementId, MemoryDocument, ScrollBehavior, ScrollRequest};
use catalog_rs::interaction::toggle::CART_IDLE_HTML;

fn page(document: MemoryDocument) -> CatalogPage<MemoryDocument> {
    CatalogPage::new(document, PageConfig::default()).expect("page init")
}

#[test]
fn default_routes_are_registered_in_dispatch_order() {
    let page = page(MemoryDocument::new());
    let routes: Vec<ClickRoute> = page.router().routes().collect();
    assert_eq!(
        routes,
        vec![
            ClickRoute::NotificationDismiss,
            ClickRoute::ScrollToTop,
            ClickRoute::CartAdd,
            ClickRoute::WishlistToggle,
            ClickRoute::LoadingButton,
            ClickRoute::FilterToggle,
            ClickRoute::InPageAnchor,
        ]
    );
}

#[test]
fn unmatched_click_runs_nothing() {
    let mut document = MemoryDocument::new();
    let body = document.body();
    let paragraph = document.append(body, "p", &["lead"]);
    document.set_inner_html(paragraph, "Cart totals are shown at checkout");
    let mut page = page(document);

    let outcome = page.click(paragraph);

    assert!(outcome.routes.is_empty());
    assert!(!outcome.default_prevented);
}

#[test]
fn filter_toggle_flips_panel_visibility() {
    let mut document = MemoryDocument::new();
    let body = document.body();
    let toggle = document.append(body, "button", &["btn", "d-md-none"]);
    document.set_attribute(toggle, "id", FILTER_TOGGLE_ID);
    document.set_inner_html(toggle, "Filters");
    let icon = document.append(toggle, "i", &["fas", "fa-filter"]);
    let column = document.append(body, "div", &[FILTERS_COLUMN_CLASS, "col-md-3"]);
    let mut page = page(document);

    let outcome = page.click(icon);
    assert!(outcome.handled(ClickRoute::FilterToggle));
    assert!(page.document().has_class(column, "show"));

    page.click(toggle);
    assert!(!page.document().has_class(column, "show"));
}

#[test]
fn hash_anchor_scrolls_target_into_view() {
    let mut document = MemoryDocument::new();
    let body = document.body();
    let anchor = document.append(body, "a", &["nav-link"]);
    document.set_attribute(anchor, "href", "#reviews");
    let section = document.append(body, "section", &[]);
    document.set_attribute(section, "id", "reviews");
    let dangling = document.append(body, "a", &[]);
    document.set_attribute(dangling, "href", "#missing");
    let external = document.append(body, "a", &[]);
    document.set_attribute(external, "href", "/products");
    let mut page = page(document);

    let outcome = page.click(anchor);
    assert!(outcome.default_prevented);
    assert_eq!(
        page.document().scroll_requests(),
        &[ScrollRequest::IntoView(section, ScrollBehavior::Smooth)]
    );

    assert!(page.click(dangling).default_prevented);
    assert!(page.click(external).routes.is_empty());
    assert_eq!(page.document().scroll_requests().len(), 1);
}

#[test]
fn button_matching_several_routes_runs_each_handler() {
    let mut document = MemoryDocument::new();
    let body = document.body();
    let button = document.append(body, "button", &["btn"]);
    document.set_inner_html(button, CART_IDLE_HTML);
    document.set_attribute(button, "data-loading", "");
    let mut page = page(document);

    let outcome = page.click(button);

    assert_eq!(
        outcome.routes.as_slice(),
        &[ClickRoute::CartAdd, ClickRoute::LoadingButton]
    );
    assert!(outcome.default_prevented);
    assert!(page.cart_state(button).active);
    assert!(page.is_button_loading(button));
}

#[test]
fn removed_route_stops_dispatching() {
    let mut document = MemoryDocument::new();
    let body = document.body();
    let button = document.append(body, "button", &["btn"]);
    document.set_inner_html(button, CART_IDLE_HTML);
    let mut page = page(document);

    assert!(page.router_mut().unregister(ClickRoute::CartAdd));
    assert!(!page.router_mut().unregister(ClickRoute::CartAdd));

    assert!(page.click(button).routes.is_empty());
    assert!(!page.cart_state(button).active);
}

#[test]
fn re_registering_replaces_matcher_in_place() {
    let mut router = ClickRouter::with_default_routes(ElementId::new(999));
    router.register(ClickRoute::CartAdd, ClickMatcher::button_text(&["Basket"]));

    let routes: Vec<ClickRoute> = router.routes().collect();
    assert_eq!(routes[2], ClickRoute::CartAdd);
    assert_eq!(
        router.matcher(ClickRoute::CartAdd),
        Some(&ClickMatcher::ButtonText(vec!["Basket".to_owned()]))
    );

    let mut document = MemoryDocument::new();
    let body = document.body();
    let basket = document.append(body, "a", &["btn"]);
    document.set_inner_html(basket, "Add to Basket");
    let matches = router.route(&document, basket);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].route, ClickRoute::CartAdd);
    assert_eq!(matches[0].element, basket);
}

#[test]
fn nested_badge_button_delegates_to_enclosing_cart_button() {
    let mut document = MemoryDocument::new();
    let body = document.body();
    let cart = document.append(body, "a", &["btn", "btn-primary"]);
    document.set_inner_html(cart, "Add to Cart ");
    let badge = document.append(cart, "span", &["btn", "badge"]);
    document.set_inner_html(badge, "3");

    let router = ClickRouter::with_default_routes(ElementId::new(u64::MAX));
    let matches = router.route(&document, badge);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].route, ClickRoute::CartAdd);
    assert_eq!(matches[0].element, cart);
}
