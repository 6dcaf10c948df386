use tracing::{debug, info};

use crate::dom::{Document, ElementId};
use crate::extensions::PageEvent;
use crate::interaction::lazy_image::{DEFERRED_SOURCE_ATTRIBUTE, LAZY_MARKER_CLASS};
use crate::interaction::{IntersectionEntry, LazyImagePhase};

use super::CatalogPage;

impl<D: Document> CatalogPage<D> {
    /// Starts observing every `img[data-src]` not yet managed.
    ///
    /// Safe to call again after the host inserts content; images already
    /// watched or swapped are skipped. Returns how many were newly watched.
    pub fn scan_lazy_images(&mut self) -> usize {
        let mut watched = 0;
        for element in self.document.elements_with_attribute(DEFERRED_SOURCE_ATTRIBUTE) {
            if self.document.tag_name(element).as_deref() != Some("img") {
                continue;
            }
            if self.lazy_images.watch(element) {
                self.document.observe_viewport(element);
                watched += 1;
            }
        }
        if watched > 0 {
            debug!(watched, "lazy images observed");
        }
        watched
    }

    /// Applies one batch of viewport intersection reports.
    ///
    /// Each intersecting watched image gets its real source, loses the lazy
    /// marker and is unobserved. Returns how many sources were swapped.
    pub fn viewport_intersections(&mut self, entries: &[IntersectionEntry]) -> usize {
        let mut swapped = 0;
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if self.lazy_images.begin_load(entry.element).is_none() {
                continue;
            }
            self.document.unobserve_viewport(entry.element);
            if let Some(source) = self
                .document
                .attribute(entry.element, DEFERRED_SOURCE_ATTRIBUTE)
            {
                self.document.set_attribute(entry.element, "src", &source);
            }
            self.document.remove_class(entry.element, LAZY_MARKER_CLASS);
            info!(element = entry.element.raw(), "lazy image source swapped");
            self.emit_page_event(PageEvent::LazyImageLoading {
                element: entry.element,
            });
            swapped += 1;
        }
        swapped
    }

    /// Records the host's load event for a swapped image.
    pub fn image_loaded(&mut self, element: ElementId) -> bool {
        if !self.lazy_images.mark_loaded(element) {
            return false;
        }
        self.emit_page_event(PageEvent::LazyImageLoaded { element });
        true
    }

    #[must_use]
    pub fn lazy_image_phase(&self, element: ElementId) -> Option<LazyImagePhase> {
        self.lazy_images.phase(element)
    }
}
