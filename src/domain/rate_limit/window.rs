//! Fixed-window admission arithmetic
//!
//! Pure functions over a stored [`RateWindow`]; the store round trip lives
//! in the infrastructure limiter.

use std::time::Duration;

use super::entity::RateWindow;

/// Outcome of evaluating one request against a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVerdict {
    /// Request fits; `next` must be written back
    Admit {
        next: RateWindow,
        limit: u32,
        remaining: u32,
        reset_in_secs: u64,
    },
    /// Budget exhausted; nothing is written
    Reject { limit: u32, retry_after_secs: u64 },
}

/// Fixed window of a configured length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWindow {
    length_ms: i64,
}

impl Default for FixedWindow {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

impl FixedWindow {
    pub fn new(length: Duration) -> Self {
        Self {
            length_ms: i64::try_from(length.as_millis()).unwrap_or(i64::MAX),
        }
    }

    pub fn length_ms(&self) -> i64 {
        self.length_ms
    }

    /// Store TTL for a written window: ceil(1.5 * W) in whole seconds
    pub fn store_ttl(&self) -> Duration {
        let millis = self.length_ms.saturating_mul(3) / 2;
        Duration::from_secs(ceil_div_secs(millis).max(1))
    }

    /// Evaluate a request arriving at `now_ms` against the stored window
    pub fn evaluate(&self, stored: Option<RateWindow>, now_ms: i64, limit: u32) -> WindowVerdict {
        let current = match stored {
            Some(window) if now_ms.saturating_sub(window.window_start) < self.length_ms => window,
            _ => RateWindow::new(now_ms, 0),
        };

        let remaining_ms = self.length_ms - now_ms.saturating_sub(current.window_start);
        let seconds_left = ceil_div_secs(remaining_ms).max(1);

        if current.count >= limit {
            return WindowVerdict::Reject {
                limit,
                retry_after_secs: seconds_left,
            };
        }

        let next = RateWindow::new(current.window_start, current.count + 1);

        WindowVerdict::Admit {
            next,
            limit,
            remaining: limit.saturating_sub(next.count),
            reset_in_secs: seconds_left,
        }
    }
}

fn ceil_div_secs(millis: i64) -> u64 {
    if millis <= 0 {
        return 0;
    }
    u64::try_from((millis + 999) / 1000).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn window() -> FixedWindow {
        FixedWindow::default()
    }

    #[test]
    fn test_absent_window_starts_fresh() {
        let verdict = window().evaluate(None, NOW, 5);

        assert_eq!(
            verdict,
            WindowVerdict::Admit {
                next: RateWindow::new(NOW, 1),
                limit: 5,
                remaining: 4,
                reset_in_secs: 60,
            }
        );
    }

    #[test]
    fn test_live_window_is_incremented() {
        let stored = RateWindow::new(NOW - 10_000, 3);
        let verdict = window().evaluate(Some(stored), NOW, 5);

        match verdict {
            WindowVerdict::Admit { next, remaining, .. } => {
                assert_eq!(next, RateWindow::new(NOW - 10_000, 4));
                assert_eq!(remaining, 1);
            }
            other => panic!("expected admit, got {:?}", other),
        }
    }

    #[test]
    fn test_last_slot_admits_then_rejects() {
        let w = window();

        let verdict = w.evaluate(Some(RateWindow::new(NOW, 4)), NOW, 5);
        assert!(matches!(verdict, WindowVerdict::Admit { remaining: 0, .. }));

        let verdict = w.evaluate(Some(RateWindow::new(NOW, 5)), NOW, 5);
        assert!(matches!(verdict, WindowVerdict::Reject { .. }));
    }

    #[test]
    fn test_retry_after_rounds_up() {
        let stored = RateWindow::new(NOW - 20_500, 5);
        let verdict = window().evaluate(Some(stored), NOW, 5);

        assert_eq!(
            verdict,
            WindowVerdict::Reject {
                limit: 5,
                retry_after_secs: 40,
            }
        );
    }

    #[test]
    fn test_retry_after_is_at_least_one_second() {
        let stored = RateWindow::new(NOW - 59_999, 5);
        let verdict = window().evaluate(Some(stored), NOW, 5);

        assert!(matches!(
            verdict,
            WindowVerdict::Reject {
                retry_after_secs: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_window_resets_exactly_at_length() {
        let stored = RateWindow::new(NOW - 60_000, 5);
        let verdict = window().evaluate(Some(stored), NOW, 5);

        match verdict {
            WindowVerdict::Admit { next, .. } => assert_eq!(next, RateWindow::new(NOW, 1)),
            other => panic!("expected admit, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_limit_always_rejects() {
        let verdict = window().evaluate(None, NOW, 0);
        assert!(matches!(
            verdict,
            WindowVerdict::Reject {
                retry_after_secs: 60,
                ..
            }
        ));
    }

    #[test]
    fn test_store_ttl_is_one_and_a_half_windows() {
        assert_eq!(window().store_ttl(), Duration::from_secs(90));
        assert_eq!(
            FixedWindow::new(Duration::from_secs(1)).store_ttl(),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_boundary_burst_is_permitted() {
        // Fixed windows allow up to 2x limit across a boundary
        let w = window();
        let late = RateWindow::new(NOW - 59_000, 4);

        assert!(matches!(
            w.evaluate(Some(late), NOW, 5),
            WindowVerdict::Admit { .. }
        ));
        assert!(matches!(
            w.evaluate(Some(RateWindow::new(NOW - 59_000, 5)), NOW + 1_000, 5),
            WindowVerdict::Admit { next, .. } if next.count == 1
        ));
    }
}
