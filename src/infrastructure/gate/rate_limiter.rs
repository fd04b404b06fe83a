//! Fixed-window rate limiter backed by the key store

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::api_key::{DEFAULT_PLAN, key_prefix};
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::keystore::{KeyStore, KeyStoreExt};
use crate::domain::rate_limit::{FixedWindow, PlanLimits, RateWindow, WindowVerdict, rate_limit_key};
use crate::domain::DomainError;

/// Budget left after an admitted request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateStatus {
    pub limit: u32,
    pub remaining: u32,
    pub reset_in_secs: u64,
}

/// Result of a rate check that did not reject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Admitted(RateStatus),
    /// No API key on the request; nothing was counted
    Bypassed,
}

/// Per-key fixed-window limiter
///
/// Each check is an unlocked read-modify-write against the store, so
/// concurrent requests for one key can be admitted past the limit.
#[derive(Clone)]
pub struct FixedWindowRateLimiter {
    store: Option<Arc<dyn KeyStore>>,
    plans: PlanLimits,
    window: FixedWindow,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for FixedWindowRateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedWindowRateLimiter")
            .field("store", &self.store)
            .field("plans", &self.plans)
            .field("window", &self.window)
            .finish()
    }
}

impl FixedWindowRateLimiter {
    pub fn new(store: Option<Arc<dyn KeyStore>>, plans: PlanLimits, window: FixedWindow) -> Self {
        Self {
            store,
            plans,
            window,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn plans(&self) -> &PlanLimits {
        &self.plans
    }

    /// Count one request for `api_key` on `plan`
    ///
    /// `plan` is `None` when no key record is attached; the default plan
    /// applies.
    pub async fn check(
        &self,
        api_key: Option<&str>,
        plan: Option<&str>,
    ) -> Result<RateDecision, DomainError> {
        let Some(api_key) = api_key else {
            return Ok(RateDecision::Bypassed);
        };

        let Some(store) = &self.store else {
            error!("Key store binding is not configured for rate limiting");
            return Err(DomainError::configuration("Server configuration error."));
        };

        let plan = plan.unwrap_or(DEFAULT_PLAN);
        let limit = self.plans.limit_for(plan);
        let storage_key = rate_limit_key(api_key);

        let stored = store
            .get::<RateWindow>(&storage_key)
            .await
            .map_err(|e| store_failure(api_key, e))?;

        let now = self.clock.now_millis();

        match self.window.evaluate(stored, now, limit) {
            WindowVerdict::Reject {
                limit,
                retry_after_secs,
            } => {
                warn!(
                    key_prefix = %key_prefix(api_key),
                    plan,
                    limit,
                    retry_after_secs,
                    "Rate limit exceeded"
                );
                Err(DomainError::too_many_requests(retry_after_secs))
            }
            WindowVerdict::Admit {
                next,
                limit,
                remaining,
                reset_in_secs,
            } => {
                store
                    .put(&storage_key, &next, Some(self.window.store_ttl()))
                    .await
                    .map_err(|e| store_failure(api_key, e))?;

                debug!(
                    key_prefix = %key_prefix(api_key),
                    plan,
                    count = next.count,
                    limit,
                    "Request admitted"
                );

                Ok(RateDecision::Admitted(RateStatus {
                    limit,
                    remaining,
                    reset_in_secs,
                }))
            }
        }
    }
}

fn store_failure(api_key: &str, e: DomainError) -> DomainError {
    error!(key_prefix = %key_prefix(api_key), error = %e, "Rate limit store access failed");
    DomainError::internal("An error occurred during rate limiting.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::time::Duration;

    use crate::domain::clock::MockClock;
    use crate::domain::keystore::MockKeyStore;

    const T0: i64 = 1_700_000_000_000;

    fn fixed_clock(now: i64) -> Arc<dyn Clock> {
        let mut clock = MockClock::new();
        clock.expect_now_millis().return_const(now);
        Arc::new(clock)
    }

    /// Clock whose time the test advances between calls
    fn shared_clock(time: Arc<AtomicI64>) -> Arc<dyn Clock> {
        let mut clock = MockClock::new();
        clock
            .expect_now_millis()
            .returning(move || time.load(Ordering::SeqCst));
        Arc::new(clock)
    }

    fn limiter(store: Arc<MockKeyStore>, clock: Arc<dyn Clock>) -> FixedWindowRateLimiter {
        FixedWindowRateLimiter::new(Some(store), PlanLimits::default(), FixedWindow::default())
            .with_clock(clock)
    }

    async fn stored_window(store: &MockKeyStore, key: &str) -> Option<RateWindow> {
        store.get(&rate_limit_key(key)).await.unwrap()
    }

    #[tokio::test]
    async fn test_free_plan_admits_five_then_rejects() {
        let store = Arc::new(MockKeyStore::new());
        let limiter = limiter(store.clone(), fixed_clock(T0));

        for expected_remaining in (0..5).rev() {
            let decision = limiter.check(Some("K1"), Some("free")).await.unwrap();
            assert_eq!(
                decision,
                RateDecision::Admitted(RateStatus {
                    limit: 5,
                    remaining: expected_remaining,
                    reset_in_secs: 60,
                })
            );
        }

        let err = limiter.check(Some("K1"), Some("free")).await.unwrap_err();
        match err {
            DomainError::TooManyRequests { retry_after_secs } => assert_eq!(retry_after_secs, 60),
            other => panic!("expected too many requests, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejection_does_not_write() {
        let store = Arc::new(MockKeyStore::new());
        let limiter = limiter(store.clone(), fixed_clock(T0));

        for _ in 0..5 {
            limiter.check(Some("K1"), Some("free")).await.unwrap();
        }
        let writes = store.writes();

        limiter.check(Some("K1"), Some("free")).await.unwrap_err();

        assert_eq!(store.writes(), writes);
        assert_eq!(stored_window(&store, "K1").await, Some(RateWindow::new(T0, 5)));
    }

    #[tokio::test]
    async fn test_window_resets_after_length() {
        let time = Arc::new(AtomicI64::new(T0));
        let store = Arc::new(MockKeyStore::new());
        let limiter = limiter(store.clone(), shared_clock(time.clone()));

        for _ in 0..5 {
            limiter.check(Some("K1"), Some("free")).await.unwrap();
        }

        time.store(T0 + 59_999, Ordering::SeqCst);
        let err = limiter.check(Some("K1"), Some("free")).await.unwrap_err();
        assert!(matches!(err, DomainError::TooManyRequests { retry_after_secs: 1 }));

        time.store(T0 + 60_000, Ordering::SeqCst);
        let decision = limiter.check(Some("K1"), Some("free")).await.unwrap();
        assert!(matches!(decision, RateDecision::Admitted(RateStatus { remaining: 4, .. })));
        assert_eq!(
            stored_window(&store, "K1").await,
            Some(RateWindow::new(T0 + 60_000, 1))
        );
    }

    #[tokio::test]
    async fn test_retry_after_counts_down() {
        let store = Arc::new(
            MockKeyStore::new().with_entry(&rate_limit_key("K1"), &RateWindow::new(T0, 5)),
        );
        let limiter = limiter(store, fixed_clock(T0 + 45_500));

        let err = limiter.check(Some("K1"), Some("free")).await.unwrap_err();
        assert!(matches!(err, DomainError::TooManyRequests { retry_after_secs: 15 }));
    }

    #[tokio::test]
    async fn test_write_uses_ninety_second_ttl() {
        let store = Arc::new(MockKeyStore::new());
        let limiter = limiter(store.clone(), fixed_clock(T0));

        limiter.check(Some("K1"), Some("pro")).await.unwrap();

        assert_eq!(
            store.ttl_of(&rate_limit_key("K1")),
            Some(Duration::from_secs(90))
        );
    }

    #[tokio::test]
    async fn test_unknown_and_missing_plan_use_default() {
        let store = Arc::new(MockKeyStore::new());
        let limiter = limiter(store, fixed_clock(T0));

        let decision = limiter.check(Some("K1"), Some("enterprise")).await.unwrap();
        assert!(matches!(decision, RateDecision::Admitted(RateStatus { limit: 5, .. })));

        let decision = limiter.check(Some("K2"), None).await.unwrap();
        assert!(matches!(decision, RateDecision::Admitted(RateStatus { limit: 5, .. })));
    }

    #[tokio::test]
    async fn test_plans_are_independent_per_key() {
        let store = Arc::new(MockKeyStore::new());
        let limiter = limiter(store, fixed_clock(T0));

        for _ in 0..5 {
            limiter.check(Some("K1"), Some("free")).await.unwrap();
        }

        let decision = limiter.check(Some("K2"), Some("test")).await.unwrap();
        assert!(matches!(
            decision,
            RateDecision::Admitted(RateStatus { limit: 1000, remaining: 999, .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_key_bypasses() {
        let store = Arc::new(MockKeyStore::new());
        let limiter = limiter(store.clone(), fixed_clock(T0));

        assert_eq!(
            limiter.check(None, Some("free")).await.unwrap(),
            RateDecision::Bypassed
        );
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_unbound_store_is_configuration_error() {
        let limiter =
            FixedWindowRateLimiter::new(None, PlanLimits::default(), FixedWindow::default());

        let err = limiter.check(Some("K1"), Some("free")).await.unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let store = Arc::new(MockKeyStore::new().with_error("timeout"));
        let limiter = limiter(store, fixed_clock(T0));

        let err = limiter.check(Some("K1"), Some("free")).await.unwrap_err();
        match err {
            DomainError::Internal { message } => {
                assert_eq!(message, "An error occurred during rate limiting.")
            }
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_corrupt_window_is_internal() {
        let store = Arc::new(MockKeyStore::new().with_raw_entry("rate_limit:K1", "{bad"));
        let limiter = limiter(store, fixed_clock(T0));

        let err = limiter.check(Some("K1"), Some("free")).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_checks_may_overshoot() {
        // Without a lock, every task can read the same stale count. The
        // admitted total is bounded by the task count, not by the limit.
        let store = Arc::new(MockKeyStore::new());
        let limiter = Arc::new(limiter(store, fixed_clock(T0)));

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let limiter = limiter.clone();
                tokio::spawn(async move { limiter.check(Some("K1"), Some("free")).await })
            })
            .collect();

        let mut admitted = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                admitted += 1;
            }
        }

        assert!(admitted >= 5, "at least the limit must be admitted");
        assert!(admitted <= 20);
    }
}
