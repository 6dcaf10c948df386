pub mod debounce;
pub mod price;
pub mod scheduler;

pub use debounce::{Debounced, Debouncer, Throttler};
pub use price::{format_price_usd, normalize_price_text, round_to_cents};
pub use scheduler::{Scheduler, TimerId, TimerQueue};
