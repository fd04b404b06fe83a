//! API key record and related types

use serde::{Deserialize, Serialize};

/// Plan assumed for records stored without one
pub const DEFAULT_PLAN: &str = "default";

fn default_plan() -> String {
    DEFAULT_PLAN.to_string()
}

/// Record stored under the raw API key
///
/// Provisioned out of band; the request path only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    pub enabled: bool,
    #[serde(default = "default_plan")]
    pub plan: String,
}

impl ApiKeyRecord {
    /// Create an enabled record on the given plan
    pub fn new(plan: impl Into<String>) -> Self {
        Self {
            enabled: true,
            plan: plan.into(),
        }
    }

    /// Mark the record disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }
}

/// A caller that passed the auth gate
///
/// Attached to request extensions for the rate limiter and handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedKey {
    pub key: String,
    pub record: ApiKeyRecord,
}

impl AuthenticatedKey {
    pub fn new(key: impl Into<String>, record: ApiKeyRecord) -> Self {
        Self {
            key: key.into(),
            record,
        }
    }

    /// Short prefix suitable for logs
    pub fn key_prefix(&self) -> String {
        key_prefix(&self.key)
    }
}

/// First eight characters of a key, for log fields
pub fn key_prefix(key: &str) -> String {
    key.chars().take(8).collect()
}
