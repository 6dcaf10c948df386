//! Optional hooks live here.
//!
//! Keep extensions observational and avoid coupling them into controller paths.

pub mod plugins;

pub use plugins::{PageContext, PageEvent, PagePlugin};
