use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dom::ElementId;

pub const DEFERRED_SOURCE_ATTRIBUTE: &str = "data-src";
pub const LAZY_MARKER_CLASS: &str = "lazy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LazyImagePhase {
    Unloaded,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportWatchEntry {
    pub element: ElementId,
    pub loaded: bool,
}

/// One viewport intersection report from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub element: ElementId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    #[must_use]
    pub fn intersecting(element: ElementId) -> Self {
        Self {
            element,
            is_intersecting: true,
        }
    }
}

/// Tracks deferred images from first observation to their terminal load.
///
/// An element leaves the watch set the moment its source is swapped and can
/// never be watched again.
#[derive(Debug, Clone, Default)]
pub struct LazyImageLoader {
    watched: IndexMap<ElementId, ViewportWatchEntry>,
    swapped: IndexMap<ElementId, LazyImagePhase>,
}

impl LazyImageLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching an element. Returns `false` when it is already managed.
    pub fn watch(&mut self, element: ElementId) -> bool {
        if self.watched.contains_key(&element) || self.swapped.contains_key(&element) {
            return false;
        }
        self.watched.insert(
            element,
            ViewportWatchEntry {
                element,
                loaded: false,
            },
        );
        true
    }

    /// Moves a watched element to `Loading` and destroys its watch entry.
    ///
    /// Returns the retired entry, or `None` when the element is not watched.
    pub fn begin_load(&mut self, element: ElementId) -> Option<ViewportWatchEntry> {
        let mut entry = self.watched.shift_remove(&element)?;
        entry.loaded = true;
        self.swapped.insert(element, LazyImagePhase::Loading);
        Some(entry)
    }

    /// Records the host's load event. Returns `true` on the first report only.
    pub fn mark_loaded(&mut self, element: ElementId) -> bool {
        match self.swapped.get_mut(&element) {
            Some(phase) if *phase == LazyImagePhase::Loading => {
                *phase = LazyImagePhase::Loaded;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn phase(&self, element: ElementId) -> Option<LazyImagePhase> {
        if self.watched.contains_key(&element) {
            return Some(LazyImagePhase::Unloaded);
        }
        self.swapped.get(&element).copied()
    }

    #[must_use]
    pub fn is_watched(&self, element: ElementId) -> bool {
        self.watched.contains_key(&element)
    }

    #[must_use]
    pub fn watched_len(&self) -> usize {
        self.watched.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = (ElementId, LazyImagePhase)> + '_ {
        self.watched
            .keys()
            .map(|element| (*element, LazyImagePhase::Unloaded))
            .chain(self.swapped.iter().map(|(element, phase)| (*element, *phase)))
    }
}
