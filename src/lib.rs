//! catalog-rs: interaction runtime for a server-rendered product catalog page.
//!
//! The crate drives live search suggestions, lazy images, toggle controls,
//! scroll affordances and notifications against an abstract `Document`, with
//! every deferred action routed through an injected virtual-clock scheduler.
//! The `client` module wraps the catalog HTTP endpoints behind a uniform
//! success/failure envelope.

pub mod api;
pub mod client;
pub mod core;
pub mod dom;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{CatalogPage, PageConfig};
pub use client::{AsyncResult, DataClient};
pub use error::{CatalogError, CatalogResult};
