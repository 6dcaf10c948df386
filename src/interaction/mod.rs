//! Interaction state machines.
//!
//! Types here hold page-view state only; they never touch the document or
//! the clock directly. The page runtime in `api` applies their decisions.

pub mod lazy_image;
pub mod notification;
pub mod scroll;
pub mod search;
pub mod toggle;

pub use lazy_image::{IntersectionEntry, LazyImageLoader, LazyImagePhase, ViewportWatchEntry};
pub use notification::{LiveNotification, Notification, NotificationId, NotificationQueue, Severity};
pub use scroll::{ScrollAction, ScrollAffordance, ScrollVisibility};
pub use search::{SearchInputState, SuggestionOutcome, SuggestionRequest};
pub use toggle::{CartConfirmations, LoadingButtons, ToggleControlState, ToggleKind};
