//! Rate limit domain - fixed-window counters keyed per API key

mod entity;
mod window;

pub use entity::{PlanLimits, RATE_LIMIT_KEY_PREFIX, RateWindow, rate_limit_key};
pub use window::{FixedWindow, WindowVerdict};
