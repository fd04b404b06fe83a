//! Key store factory for runtime selection

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::keystore::KeyStore;

use super::in_memory::{InMemoryKeyStore, InMemoryKeyStoreConfig};
use super::redis::{RedisKeyStore, RedisKeyStoreConfig};

/// Supported store backends
#[derive(Debug, Clone, Default, PartialEq)]
pub enum KeyStoreType {
    #[default]
    InMemory,
    Redis,
}

impl std::fmt::Display for KeyStoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyStoreType::InMemory => write!(f, "in_memory"),
            KeyStoreType::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for KeyStoreType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(KeyStoreType::InMemory),
            "redis" => Ok(KeyStoreType::Redis),
            _ => Err(DomainError::configuration(format!(
                "Unknown store kind: {}. Valid kinds: in_memory, redis",
                s
            ))),
        }
    }
}

/// Backend selection plus per-backend settings
#[derive(Debug, Clone)]
pub struct KeyStoreConfig {
    pub store_type: KeyStoreType,
    /// Required for Redis
    pub redis_url: Option<String>,
    pub key_prefix: Option<String>,
    /// In-memory only
    pub max_capacity: Option<u64>,
}

impl Default for KeyStoreConfig {
    fn default() -> Self {
        Self {
            store_type: KeyStoreType::InMemory,
            redis_url: None,
            key_prefix: None,
            max_capacity: None,
        }
    }
}

impl KeyStoreConfig {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            store_type: KeyStoreType::Redis,
            redis_url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = Some(capacity);
        self
    }
}

/// Builds the configured key store
#[derive(Debug, Default)]
pub struct KeyStoreFactory;

impl KeyStoreFactory {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(&self, config: &KeyStoreConfig) -> Result<Arc<dyn KeyStore>, DomainError> {
        match config.store_type {
            KeyStoreType::InMemory => {
                let mut in_memory_config = InMemoryKeyStoreConfig::default();

                if let Some(capacity) = config.max_capacity {
                    in_memory_config = in_memory_config.with_max_capacity(capacity);
                }

                Ok(Arc::new(InMemoryKeyStore::with_config(in_memory_config)))
            }
            KeyStoreType::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    DomainError::configuration("Redis URL is required for the redis store kind")
                })?;

                let mut redis_config = RedisKeyStoreConfig::new(url);

                if let Some(prefix) = &config.key_prefix {
                    redis_config = redis_config.with_key_prefix(prefix.clone());
                }

                Ok(Arc::new(RedisKeyStore::new(redis_config).await?))
            }
        }
    }
}
