//! Redis key store

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::domain::DomainError;
use crate::domain::keystore::KeyStore;

/// Configuration for the Redis store
#[derive(Debug, Clone)]
pub struct RedisKeyStoreConfig {
    /// Redis connection URL (e.g., "redis://127.0.0.1:6379")
    pub url: String,
    /// Key prefix for namespacing
    pub key_prefix: Option<String>,
}

impl RedisKeyStoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key_prefix: None,
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

/// Key store shared across gateway replicas through Redis
///
/// Rate windows are plain `GET`/`SET EX` pairs. There is no `WATCH` or Lua
/// script, so concurrent replicas may overshoot a window's limit.
#[derive(Clone)]
pub struct RedisKeyStore {
    connection: ConnectionManager,
    config: RedisKeyStoreConfig,
}

impl fmt::Debug for RedisKeyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisKeyStore")
            .field("config", &self.config)
            .field("connection", &"<ConnectionManager>")
            .finish()
    }
}

impl RedisKeyStore {
    pub async fn new(config: RedisKeyStoreConfig) -> Result<Self, DomainError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| DomainError::store(format!("Failed to create Redis client: {}", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| DomainError::store(format!("Failed to connect to Redis: {}", e)))?;

        Ok(Self { connection, config })
    }

    fn prefix_key(&self, key: &str) -> String {
        prefixed(self.config.key_prefix.as_deref(), key)
    }
}

fn prefixed(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, key),
        None => key.to_string(),
    }
}

#[async_trait]
impl KeyStore for RedisKeyStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        let prefixed_key = self.prefix_key(key);
        let mut conn = self.connection.clone();

        let result: Option<String> = conn
            .get(&prefixed_key)
            .await
            .map_err(|e| DomainError::store(format!("Failed to get key: {}", e)))?;

        Ok(result)
    }

    async fn put_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        let prefixed_key = self.prefix_key(key);
        let mut conn = self.connection.clone();

        let result: redis::RedisResult<()> = match ttl {
            Some(ttl) => {
                conn.set_ex(&prefixed_key, value, ttl.as_secs().max(1))
                    .await
            }
            None => conn.set(&prefixed_key, value).await,
        };

        result.map_err(|e| DomainError::store(format!("Failed to set key: {}", e)))
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let prefixed_key = self.prefix_key(key);
        let mut conn = self.connection.clone();

        let deleted: i32 = conn
            .del(&prefixed_key)
            .await
            .map_err(|e| DomainError::store(format!("Failed to delete key: {}", e)))?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api_key::ApiKeyRecord;
    use crate::domain::keystore::KeyStoreExt;

    // These need a running Redis: cargo test -- --ignored

    fn test_config() -> RedisKeyStoreConfig {
        RedisKeyStoreConfig::new("redis://127.0.0.1:6379").with_key_prefix("fakedata-test")
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_redis_put_and_get() {
        let store = RedisKeyStore::new(test_config()).await.unwrap();

        store
            .put("K1", &ApiKeyRecord::new("pro"), None)
            .await
            .unwrap();

        let record: Option<ApiKeyRecord> = store.get("K1").await.unwrap();
        assert_eq!(record, Some(ApiKeyRecord::new("pro")));

        store.delete("K1").await.unwrap();
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_redis_ttl_expiry() {
        let store = RedisKeyStore::new(test_config()).await.unwrap();

        store
            .put_raw("rate_limit:K1", "{}", Some(Duration::from_secs(1)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(store.get_raw("rate_limit:K1").await.unwrap().is_none());
    }

    #[test]
    fn test_key_prefix() {
        assert_eq!(prefixed(Some("app"), "rate_limit:K1"), "app:rate_limit:K1");
        assert_eq!(prefixed(None, "K1"), "K1");
    }
}
