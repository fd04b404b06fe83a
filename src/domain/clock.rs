//! Wall clock abstraction for window arithmetic

use chrono::Utc;

#[cfg(test)]
use mockall::automock;

/// Source of the current time in epoch millis
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
