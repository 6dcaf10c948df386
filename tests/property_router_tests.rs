use catalog_rs::api::{ClickMatcher, ClickRoute, ClickRouter};
use catalog_rs::dom::{Document, ElementId, MemoryDocument};
use proptest::prelude::*;

proptest! {
    #[test]
    fn delegation_resolves_nearest_button_from_any_depth(
        depth in 0usize..12,
        wrapper_depth in 0usize..6,
        label in "[a-z ]{0,12}",
    ) {
        let mut document = MemoryDocument::new();
        let mut parent = document.body();
        for _ in 0..wrapper_depth {
            parent = document.append(parent, "div", &["card-body"]);
        }
        let button = document.append(parent, "button", &["btn"]);
        document.set_inner_html(button, &format!("{label} Cart"));

        let mut target = button;
        for _ in 0..depth {
            target = document.append(target, "span", &[]);
        }

        let router = ClickRouter::with_default_routes(ElementId::new(u64::MAX));
        let matches = router.route(&document, target);

        prop_assert_eq!(matches.len(), 1);
        prop_assert_eq!(matches[0].route, ClickRoute::CartAdd);
        prop_assert_eq!(matches[0].element, button);
    }

    #[test]
    fn closest_class_never_resolves_outside_ancestor_chain(
        depth in 1usize..10,
        marked_level in 0usize..10,
    ) {
        let mut document = MemoryDocument::new();
        let mut chain = vec![document.body()];
        for _ in 0..depth {
            let parent = chain[chain.len() - 1];
            chain.push(document.append(parent, "div", &[]));
        }
        let sibling = document.append(document.body(), "div", &["marker"]);
        let marked = chain[marked_level.min(depth)];
        document.add_class(marked, "marker");

        let target = chain[depth];
        let resolved = ClickMatcher::ClosestClass("marker".to_owned()).resolve(&document, target);

        prop_assert_eq!(resolved, Some(marked));
        prop_assert_ne!(resolved, Some(sibling));
    }
}
