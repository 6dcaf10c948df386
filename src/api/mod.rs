use indexmap::IndexMap;
use tracing::{debug, info};

use crate::core::{Throttler, TimerQueue};
use crate::dom::{Document, ElementId};
use crate::error::CatalogResult;
use crate::extensions::PagePlugin;
use crate::interaction::{
    CartConfirmations, LazyImageLoader, LoadingButtons, NotificationId, NotificationQueue,
    ScrollAffordance, SearchInputState, SuggestionRequest,
};

mod click_dispatch;
mod event_router;
mod json_contract;
mod lazy_image_controller;
mod notification_controller;
mod page_config;
mod page_init;
mod page_snapshot;
mod plugin_dispatch;
mod plugin_registry;
mod scroll_controller;
mod search_controller;
mod timer_dispatch;
mod toggle_controller;

pub use click_dispatch::ClickOutcome;
pub use event_router::{
    BUTTON_CLASS, ClickMatcher, ClickRoute, ClickRouter, FILTER_TOGGLE_ID, LOADING_ATTRIBUTE,
    NOTIFICATION_CLOSE_CLASS, RouteMatch,
};
pub use json_contract::{PAGE_SNAPSHOT_JSON_SCHEMA_V1, PageSnapshotJsonContractV1};
pub use page_config::{
    DEFAULT_CART_REVERT_DELAY_MS, DEFAULT_LOADING_RESTORE_DELAY_MS,
    DEFAULT_NOTIFICATION_LIFETIME_MS, DEFAULT_SCROLL_HIDE_DELAY_MS,
    DEFAULT_SCROLL_SAMPLE_INTERVAL_MS, DEFAULT_SCROLL_THRESHOLD_PX, DEFAULT_SEARCH_DEBOUNCE_MS,
    DEFAULT_SEARCH_MIN_CHARS, MAX_SEARCH_LIMIT, PageConfig,
};
pub use page_init::{FILTERS_COLUMN_CLASS, PRICE_CLASS, SCROLL_TOP_CONTROL_CLASSES};
pub use page_snapshot::{
    LazyImageSnapshot, NotificationSnapshot, PageSnapshot, SearchInputSnapshot,
};
pub use search_controller::SubmitOutcome;

/// Deferred work owned by the page runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageTimer {
    RemoveNotification(NotificationId),
    RevertCart(ElementId),
    RestoreLoadingButton(ElementId),
    ScrollHideCheck,
    ScrollSampleWindow,
    SearchDebounce(ElementId),
}

/// Interaction runtime for one catalog page view.
///
/// The runtime owns every controller's state plus the timer queue they share,
/// and reaches the page only through the `Document` capability. All state is
/// transient and dies with the page view.
pub struct CatalogPage<D: Document> {
    document: D,
    config: PageConfig,
    timers: TimerQueue<PageTimer>,
    router: ClickRouter,
    notifications: NotificationQueue,
    cart: CartConfirmations,
    loading: LoadingButtons,
    lazy_images: LazyImageLoader,
    scroll: ScrollAffordance,
    scroll_control: ElementId,
    scroll_throttle: Throttler<f64>,
    search_inputs: IndexMap<ElementId, SearchInputState>,
    suggestion_outbox: Vec<SuggestionRequest>,
    plugins: Vec<Box<dyn PagePlugin>>,
}

impl<D: Document> CatalogPage<D> {
    /// Attaches the runtime to `document`.
    ///
    /// Creates the scroll-to-top control, starts watching deferred images and
    /// normalizes price labels.
    pub fn new(mut document: D, config: PageConfig) -> CatalogResult<Self> {
        let config = config.validate()?;
        let scroll_control = page_init::create_scroll_top_control(&mut document);

        let mut page = Self {
            document,
            config,
            timers: TimerQueue::new(),
            router: ClickRouter::with_default_routes(scroll_control),
            notifications: NotificationQueue::new(),
            cart: CartConfirmations::default(),
            loading: LoadingButtons::default(),
            lazy_images: LazyImageLoader::new(),
            scroll: ScrollAffordance::new(config.scroll_threshold_px),
            scroll_control,
            scroll_throttle: Throttler::new(config.scroll_sample_interval_ms),
            search_inputs: IndexMap::new(),
            suggestion_outbox: Vec::new(),
            plugins: Vec::new(),
        };

        let watched = page.scan_lazy_images();
        let prices = page_init::format_price_labels(&mut page.document);
        info!(watched, prices, "catalog page attached");
        Ok(page)
    }

    #[must_use]
    pub fn config(&self) -> PageConfig {
        self.config
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access for hosts inserting content after page start.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub fn router(&self) -> &ClickRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut ClickRouter {
        &mut self.router
    }

    #[must_use]
    pub fn into_document(self) -> D {
        debug!(pending_timers = self.timers.len(), "catalog page detached");
        self.document
    }
}
