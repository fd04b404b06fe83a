//! In-memory key store using moka

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::DomainError;
use crate::domain::keystore::KeyStore;

/// Configuration for the in-memory store
#[derive(Debug, Clone)]
pub struct InMemoryKeyStoreConfig {
    /// Maximum number of entries written with a TTL; entries without one
    /// are never evicted
    pub max_capacity: u64,
}

impl Default for InMemoryKeyStoreConfig {
    fn default() -> Self {
        Self {
            max_capacity: 100_000,
        }
    }
}

impl InMemoryKeyStoreConfig {
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }
}

#[derive(Debug, Clone)]
struct ExpiringEntry {
    data: String,
    /// Millis since epoch
    expires_at: u64,
}

/// Process-local key store
///
/// Entries without a TTL (API key records) live in an unbounded cache so
/// capacity pressure from expiring entries (rate windows) cannot evict them.
/// Each expiring entry carries its own deadline.
#[derive(Debug)]
pub struct InMemoryKeyStore {
    records: MokaCache<String, String>,
    expiring: MokaCache<String, ExpiringEntry>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::with_config(InMemoryKeyStoreConfig::default())
    }

    pub fn with_config(config: InMemoryKeyStoreConfig) -> Self {
        Self {
            records: MokaCache::builder().build(),
            expiring: MokaCache::builder()
                .max_capacity(config.max_capacity)
                .build(),
        }
    }

    fn current_time_millis() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    fn is_expired(entry: &ExpiringEntry) -> bool {
        Self::current_time_millis() >= entry.expires_at
    }
}

impl Default for InMemoryKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyStore for InMemoryKeyStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        match self.expiring.get(key).await {
            Some(entry) if Self::is_expired(&entry) => {
                self.expiring.remove(key).await;
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.data)),
            None => Ok(self.records.get(key).await),
        }
    }

    async fn put_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        // A key lives in exactly one of the two caches
        match ttl {
            Some(ttl) => {
                let entry = ExpiringEntry {
                    data: value.to_string(),
                    expires_at: Self::current_time_millis() + ttl.as_millis() as u64,
                };
                self.records.remove(key).await;
                self.expiring.insert(key.to_string(), entry).await;
            }
            None => {
                self.expiring.remove(key).await;
                self.records.insert(key.to_string(), value.to_string()).await;
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let record = self.records.remove(key).await.is_some();
        let live = self
            .expiring
            .remove(key)
            .await
            .is_some_and(|entry| !Self::is_expired(&entry));
        Ok(record || live)
    }
}
