use catalog_rs::api::{CatalogPage, ClickRoute, PageConfig, SCROLL_TOP_CONTROL_CLASSES};
use catalog_rs::dom::{Document, MemoryDocument, ScrollBehavior, ScrollRequest};

fn unthrottled_page() -> CatalogPage<MemoryDocument> {
    let config = PageConfig::default().with_scroll_sample_interval_ms(0);
    CatalogPage::new(MemoryDocument::new(), config).expect("page init")
}

fn display(page: &CatalogPage<MemoryDocument>) -> Option<String> {
    page.document().style(page.scroll_control(), "display")
}

fn opacity(page: &CatalogPage<MemoryDocument>) -> Option<String> {
    page.document().style(page.scroll_control(), "opacity")
}

#[test]
fn control_is_created_hidden() {
    let page = unthrottled_page();
    let control = page.scroll_control();

    for class in SCROLL_TOP_CONTROL_CLASSES {
        assert!(page.document().has_class(control, class));
    }
    assert_eq!(display(&page).as_deref(), Some("none"));
    assert_eq!(opacity(&page).as_deref(), Some("0"));
    assert!(!page.scroll_visibility().visible);
    assert_eq!(page.scroll_visibility().threshold_px, 300);
}

#[test]
fn crossing_threshold_shows_then_hides_after_delay() {
    let mut page = unthrottled_page();

    page.scroll(300.0);
    assert_eq!(display(&page).as_deref(), Some("none"));

    page.scroll(450.0);
    assert_eq!(display(&page).as_deref(), Some("block"));
    assert_eq!(opacity(&page).as_deref(), Some("1"));
    assert!(page.scroll_visibility().visible);

    page.scroll(120.0);
    assert_eq!(opacity(&page).as_deref(), Some("0"));
    assert_eq!(display(&page).as_deref(), Some("block"));

    page.advance_to(299);
    assert_eq!(display(&page).as_deref(), Some("block"));
    page.advance_to(300);
    assert_eq!(display(&page).as_deref(), Some("none"));
    assert!(!page.scroll_visibility().visible);
}

#[test]
fn scrolling_back_down_before_delay_keeps_control_visible() {
    let mut page = unthrottled_page();

    page.scroll(400.0);
    page.scroll(0.0);
    page.advance_to(100);
    page.scroll(400.0);
    page.advance_to(1_000);

    assert_eq!(display(&page).as_deref(), Some("block"));
    assert_eq!(opacity(&page).as_deref(), Some("1"));
    assert!(page.scroll_visibility().visible);
}

#[test]
fn repeated_fade_out_rearms_the_hide_check() {
    let mut page = unthrottled_page();

    page.scroll(400.0);
    page.scroll(0.0);
    page.advance_to(100);
    page.scroll(400.0);
    page.advance_to(200);
    page.scroll(0.0);

    page.advance_to(300);
    assert_eq!(display(&page).as_deref(), Some("block"));
    page.advance_to(500);
    assert_eq!(display(&page).as_deref(), Some("none"));
}

#[test]
fn throttled_samples_evaluate_latest_offset_at_window_close() {
    let mut page = CatalogPage::new(MemoryDocument::new(), PageConfig::default())
        .expect("page init");

    page.scroll(400.0);
    page.advance_to(5);
    page.scroll(0.0);
    page.advance_to(10);
    page.scroll(350.0);
    assert_eq!(opacity(&page).as_deref(), Some("1"));

    page.advance_to(40);
    assert_eq!(opacity(&page).as_deref(), Some("1"));

    page.scroll(0.0);
    assert_eq!(opacity(&page).as_deref(), Some("0"));
    page.advance_to(340);
    assert_eq!(display(&page).as_deref(), Some("none"));
}

#[test]
fn clicking_control_scrolls_to_top_smoothly() {
    let mut page = unthrottled_page();
    page.scroll(900.0);

    let outcome = page.click(page.scroll_control());

    assert!(outcome.handled(ClickRoute::ScrollToTop));
    assert!(!outcome.default_prevented);
    assert_eq!(
        page.document().scroll_requests(),
        &[ScrollRequest::Top(ScrollBehavior::Smooth)]
    );
}
