use catalog_rs::api::{
    CatalogPage, DEFAULT_NOTIFICATION_LIFETIME_MS, DEFAULT_SCROLL_HIDE_DELAY_MS,
    DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_SEARCH_MIN_CHARS, PageConfig,
};
use catalog_rs::dom::{Document, MemoryDocument};
use catalog_rs::CatalogError;

#[test]
fn defaults_match_documented_timings() {
    let config = PageConfig::default();
    assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
    assert_eq!(config.search_debounce_ms, 300);
    assert_eq!(config.search_min_chars, DEFAULT_SEARCH_MIN_CHARS);
    assert_eq!(config.search_suggestion_limit, 12);
    assert_eq!(config.scroll_threshold_px, 300);
    assert_eq!(config.scroll_hide_delay_ms, DEFAULT_SCROLL_HIDE_DELAY_MS);
    assert_eq!(config.notification_lifetime_ms, DEFAULT_NOTIFICATION_LIFETIME_MS);
    assert_eq!(config.cart_revert_delay_ms, 2_000);
    assert_eq!(config.loading_restore_delay_ms, 1_500);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_fills_missing_fields_with_defaults() {
    let config =
        PageConfig::from_json_str(r#"{"search_debounce_ms": 150, "scroll_threshold_px": 800}"#)
            .expect("parse config");

    assert_eq!(config.search_debounce_ms, 150);
    assert_eq!(config.scroll_threshold_px, 800);
    assert_eq!(config.notification_lifetime_ms, 3_000);

    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(PageConfig::from_json_str(&json).expect("reparse"), config);
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        PageConfig::default().with_search_debounce_ms(0),
        PageConfig::default().with_notification_lifetime_ms(0),
        PageConfig::default().with_scroll_sample_interval_ms(DEFAULT_SCROLL_HIDE_DELAY_MS),
        PageConfig {
            search_suggestion_limit: 0,
            ..PageConfig::default()
        },
        PageConfig {
            search_suggestion_limit: 101,
            ..PageConfig::default()
        },
        PageConfig {
            search_min_chars: 0,
            ..PageConfig::default()
        },
    ];
    for config in cases {
        let err = config.validate().expect_err("invalid config");
        assert!(matches!(err, CatalogError::InvalidConfig(_)), "{err}");
    }

    let err = PageConfig::from_json_str(r#"{"cart_revert_delay_ms": "soon"}"#)
        .expect_err("wrong type");
    assert!(matches!(err, CatalogError::InvalidConfig(_)));
}

#[test]
fn page_refuses_invalid_config() {
    let config = PageConfig::default().with_search_debounce_ms(0);
    assert!(CatalogPage::new(MemoryDocument::new(), config).is_err());
}

#[test]
fn custom_timings_drive_the_page() {
    let mut document = MemoryDocument::new();
    let input = document.create_element("input", None);
    let config = PageConfig::from_json_str(r#"{"search_debounce_ms": 50, "search_min_chars": 1}"#)
        .expect("parse config");
    let mut page = CatalogPage::new(document, config).expect("page init");

    page.search_input(input, "x");
    page.advance_by(50);

    let requests = page.take_suggestion_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, "x");
}

#[test]
fn price_labels_are_normalized_at_start() {
    let mut document = MemoryDocument::new();
    let body = document.body();
    let plain = document.append(body, "span", &["price"]);
    document.set_text_content(plain, "$19.9");
    let garbage = document.append(body, "span", &["price"]);
    document.set_text_content(garbage, "call us");

    let page = CatalogPage::new(document, PageConfig::default()).expect("page init");

    assert_eq!(page.document().text_content(plain), "19.90");
    assert_eq!(page.document().text_content(garbage), "call us");
}
