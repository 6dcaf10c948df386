use tracing::debug;

use crate::core::normalize_price_text;
use crate::dom::{Document, ElementId};

pub const SCROLL_TOP_CONTROL_CLASSES: [&str; 4] =
    ["btn", "btn-primary", "rounded-circle", "position-fixed"];
pub const PRICE_CLASS: &str = "price";
pub const FILTERS_COLUMN_CLASS: &str = "filters-column";

const SCROLL_TOP_ICON_HTML: &str = r#"<i class="fas fa-chevron-up"></i>"#;
const SCROLL_TOP_STYLES: [(&str, &str); 8] = [
    ("bottom", "20px"),
    ("right", "20px"),
    ("z-index", "999"),
    ("display", "none"),
    ("width", "50px"),
    ("height", "50px"),
    ("opacity", "0"),
    ("transition", "opacity 0.3s ease"),
];

/// Appends the page-level scroll-to-top control, hidden.
pub(super) fn create_scroll_top_control<D: Document>(document: &mut D) -> ElementId {
    let control = document.create_element("button", None);
    document.set_inner_html(control, SCROLL_TOP_ICON_HTML);
    for class in SCROLL_TOP_CONTROL_CLASSES {
        document.add_class(control, class);
    }
    document.set_attribute(control, "type", "button");
    document.set_attribute(control, "aria-label", "Scroll to top");
    for (property, value) in SCROLL_TOP_STYLES {
        document.set_style(control, property, value);
    }
    control
}

/// Rewrites `.price` labels to two decimals. Returns how many were changed.
pub(super) fn format_price_labels<D: Document>(document: &mut D) -> usize {
    let mut formatted = 0;
    for element in document.elements_with_class(PRICE_CLASS) {
        let text = document.text_content(element);
        if let Some(normalized) = normalize_price_text(&text) {
            if normalized != text {
                document.set_text_content(element, &normalized);
                formatted += 1;
            }
        } else {
            debug!(element = element.raw(), text = %text, "price label left untouched");
        }
    }
    formatted
}
