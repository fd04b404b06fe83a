//! Key store trait definition

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::DomainError;

/// Key-value record store with optional per-entry TTL
///
/// Values are JSON strings so the trait stays dyn-compatible. Consistency is
/// best-effort: a read following a write from another task may observe the
/// previous value. Callers must not rely on read-modify-write atomicity.
#[async_trait]
pub trait KeyStore: Send + Sync + Debug {
    /// Gets a raw JSON value
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores a raw JSON value; `None` TTL means no expiry
    async fn put_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), DomainError>;

    /// Deletes a value, returns true if it existed
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}

/// Extension trait providing typed get/put operations
pub trait KeyStoreExt: KeyStore {
    /// Gets a typed value from the store
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get_raw(key).await? {
                Some(data) => {
                    let value: V = serde_json::from_str(&data).map_err(|e| {
                        DomainError::store(format!(
                            "Failed to deserialize value at '{}': {}",
                            key, e
                        ))
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }

    /// Stores a typed value
    fn put<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        ttl: Option<Duration>,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|e| {
                DomainError::store(format!("Failed to serialize value for '{}': {}", key, e))
            })?;
            self.put_raw(key, &data, ttl).await
        }
    }
}

impl<T: KeyStore + ?Sized> KeyStoreExt for T {}
