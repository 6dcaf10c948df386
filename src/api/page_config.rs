use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_SEARCH_LIMIT;
use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_SEARCH_MIN_CHARS: usize = 3;
pub const DEFAULT_SCROLL_THRESHOLD_PX: u32 = 300;
pub const DEFAULT_SCROLL_HIDE_DELAY_MS: u64 = 300;
pub const DEFAULT_SCROLL_SAMPLE_INTERVAL_MS: u64 = 16;
pub const DEFAULT_NOTIFICATION_LIFETIME_MS: u64 = 3_000;
pub const DEFAULT_CART_REVERT_DELAY_MS: u64 = 2_000;
pub const DEFAULT_LOADING_RESTORE_DELAY_MS: u64 = 1_500;

/// Server-side cap on `/api/search` result counts.
pub const MAX_SEARCH_LIMIT: u32 = 100;

/// Page runtime tunables.
///
/// Defaults are the compiled-in constants above; the type is serializable so
/// hosts can override individual values from JSON without restating the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_search_min_chars")]
    pub search_min_chars: usize,
    #[serde(default = "default_search_suggestion_limit")]
    pub search_suggestion_limit: u32,
    #[serde(default = "default_scroll_threshold_px")]
    pub scroll_threshold_px: u32,
    #[serde(default = "default_scroll_hide_delay_ms")]
    pub scroll_hide_delay_ms: u64,
    /// Minimum spacing between evaluated scroll samples; `0` evaluates all.
    #[serde(default = "default_scroll_sample_interval_ms")]
    pub scroll_sample_interval_ms: u64,
    #[serde(default = "default_notification_lifetime_ms")]
    pub notification_lifetime_ms: u64,
    #[serde(default = "default_cart_revert_delay_ms")]
    pub cart_revert_delay_ms: u64,
    #[serde(default = "default_loading_restore_delay_ms")]
    pub loading_restore_delay_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            search_min_chars: default_search_min_chars(),
            search_suggestion_limit: default_search_suggestion_limit(),
            scroll_threshold_px: default_scroll_threshold_px(),
            scroll_hide_delay_ms: default_scroll_hide_delay_ms(),
            scroll_sample_interval_ms: default_scroll_sample_interval_ms(),
            notification_lifetime_ms: default_notification_lifetime_ms(),
            cart_revert_delay_ms: default_cart_revert_delay_ms(),
            loading_restore_delay_ms: default_loading_restore_delay_ms(),
        }
    }
}

impl PageConfig {
    /// Sets the scroll sampling interval; `0` restores unthrottled sampling.
    #[must_use]
    pub fn with_scroll_sample_interval_ms(mut self, interval_ms: u64) -> Self {
        self.scroll_sample_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_search_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.search_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_notification_lifetime_ms(mut self, lifetime_ms: u64) -> Self {
        self.notification_lifetime_ms = lifetime_ms;
        self
    }

    pub fn validate(self) -> CatalogResult<Self> {
        if self.search_debounce_ms == 0 {
            return Err(CatalogError::InvalidConfig(
                "search_debounce_ms must be > 0".to_owned(),
            ));
        }
        if self.search_min_chars == 0 {
            return Err(CatalogError::InvalidConfig(
                "search_min_chars must be >= 1".to_owned(),
            ));
        }
        if self.search_suggestion_limit == 0 || self.search_suggestion_limit > MAX_SEARCH_LIMIT {
            return Err(CatalogError::InvalidConfig(format!(
                "search_suggestion_limit must be in 1..={MAX_SEARCH_LIMIT}"
            )));
        }
        if self.scroll_hide_delay_ms == 0 {
            return Err(CatalogError::InvalidConfig(
                "scroll_hide_delay_ms must be > 0".to_owned(),
            ));
        }
        if self.scroll_sample_interval_ms >= self.scroll_hide_delay_ms {
            return Err(CatalogError::InvalidConfig(
                "scroll_sample_interval_ms must be shorter than scroll_hide_delay_ms".to_owned(),
            ));
        }
        for (name, value) in [
            ("notification_lifetime_ms", self.notification_lifetime_ms),
            ("cart_revert_delay_ms", self.cart_revert_delay_ms),
            ("loading_restore_delay_ms", self.loading_restore_delay_ms),
        ] {
            if value == 0 {
                return Err(CatalogError::InvalidConfig(format!("{name} must be > 0")));
            }
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> CatalogResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| CatalogError::InvalidConfig(format!("failed to parse page config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> CatalogResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| CatalogError::InvalidData(format!("failed to serialize page config: {e}")))
    }
}

fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

fn default_search_min_chars() -> usize {
    DEFAULT_SEARCH_MIN_CHARS
}

fn default_search_suggestion_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}

fn default_scroll_threshold_px() -> u32 {
    DEFAULT_SCROLL_THRESHOLD_PX
}

fn default_scroll_hide_delay_ms() -> u64 {
    DEFAULT_SCROLL_HIDE_DELAY_MS
}

fn default_scroll_sample_interval_ms() -> u64 {
    DEFAULT_SCROLL_SAMPLE_INTERVAL_MS
}

fn default_notification_lifetime_ms() -> u64 {
    DEFAULT_NOTIFICATION_LIFETIME_MS
}

fn default_cart_revert_delay_ms() -> u64 {
    DEFAULT_CART_REVERT_DELAY_MS
}

fn default_loading_restore_delay_ms() -> u64 {
    DEFAULT_LOADING_RESTORE_DELAY_MS
}
