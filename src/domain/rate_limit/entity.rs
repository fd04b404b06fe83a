//! Rate window and plan limit types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::api_key::DEFAULT_PLAN;

/// Key prefix for stored rate windows
pub const RATE_LIMIT_KEY_PREFIX: &str = "rate_limit:";

/// Store key holding the rate window for an API key
pub fn rate_limit_key(api_key: &str) -> String {
    format!("{}{}", RATE_LIMIT_KEY_PREFIX, api_key)
}

/// Stored fixed-window counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateWindow {
    /// Window start, epoch millis
    pub window_start: i64,
    pub count: u32,
}

impl RateWindow {
    pub fn new(window_start: i64, count: u32) -> Self {
        Self {
            window_start,
            count,
        }
    }
}

/// Requests admitted per window, by plan name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLimits {
    limits: HashMap<String, u32>,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self::new([("test", 1000), ("free", 5), ("pro", 100), (DEFAULT_PLAN, 5)])
    }
}

impl PlanLimits {
    /// Build from (plan, limit) pairs; a `default` entry of 5 is added if missing
    pub fn new(entries: impl IntoIterator<Item = (impl Into<String>, u32)>) -> Self {
        let mut limits: HashMap<String, u32> = entries
            .into_iter()
            .map(|(plan, limit)| (plan.into(), limit))
            .collect();

        limits.entry(DEFAULT_PLAN.to_string()).or_insert(5);

        Self { limits }
    }

    /// Limit for a plan, falling back to the default plan
    pub fn limit_for(&self, plan: &str) -> u32 {
        self.limits
            .get(plan)
            .or_else(|| self.limits.get(DEFAULT_PLAN))
            .copied()
            .unwrap_or(5)
    }
}
