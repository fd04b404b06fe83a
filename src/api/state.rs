//! Application state shared by handlers and middleware

use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::count::CountValidator;
use crate::domain::keystore::KeyStore;
use crate::domain::rate_limit::{FixedWindow, PlanLimits};
use crate::infrastructure::gate::{AuthGate, FixedWindowRateLimiter};
use crate::infrastructure::generator::GeneratorInstanceManager;

/// Services behind every route
///
/// `store` is optional so a deployment with a missing store binding still
/// starts and answers protected routes with a configuration error.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn KeyStore>>,
    pub auth_gate: Arc<AuthGate>,
    pub rate_limiter: Arc<FixedWindowRateLimiter>,
    pub generators: GeneratorInstanceManager,
    pub count: CountValidator,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn KeyStore>>, plans: PlanLimits, window: FixedWindow) -> Self {
        Self {
            auth_gate: Arc::new(AuthGate::new(store.clone())),
            rate_limiter: Arc::new(FixedWindowRateLimiter::new(store.clone(), plans, window)),
            store,
            generators: GeneratorInstanceManager::default(),
            count: CountValidator::default(),
        }
    }

    /// Replace the rate limiter's clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        let limiter = self.rate_limiter.as_ref().clone().with_clock(clock);
        self.rate_limiter = Arc::new(limiter);
        self
    }

    /// Replace the default maximum `count`
    pub fn with_max_count(mut self, max: u32) -> Self {
        self.count = CountValidator::new(max);
        self
    }

    pub fn with_generators(mut self, generators: GeneratorInstanceManager) -> Self {
        self.generators = generators;
        self
    }
}
