use serde::{Deserialize, Serialize};

use crate::dom::ElementId;
use crate::interaction::{NotificationId, ScrollVisibility, Severity, ToggleControlState};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub now_ms: u64,
    pub live_notifications: usize,
    pub watched_images: usize,
    pub scroll: ScrollVisibility,
    pub pending_timers: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEvent {
    NotificationShown { id: NotificationId, severity: Severity },
    NotificationRemoved { id: NotificationId, dismissed: bool },
    ToggleChanged(ToggleControlState),
    LoadingStarted { button: ElementId },
    LoadingFinished { button: ElementId },
    LazyImageLoading { element: ElementId },
    LazyImageLoaded { element: ElementId },
    ScrollVisibilityChanged { visible: bool },
    SuggestionsRequested { input: ElementId, generation: u64 },
    SuggestionsRendered { input: ElementId, generation: u64, count: usize },
    SuggestionsDropped { input: ElementId, generation: u64 },
    SearchSubmitBlocked { input: ElementId },
    FilterPanelToggled { shown: bool },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read page context without mutating
/// controller internals directly.
pub trait PagePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PageEvent, context: PageContext);
}
