//! API key authentication against the key store

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::api_key::{ApiKeyRecord, AuthenticatedKey, key_prefix};
use crate::domain::keystore::{KeyStore, KeyStoreExt};
use crate::domain::DomainError;

/// Resolves a caller's API key to its stored record
///
/// Read-only: the gate never writes to the store.
#[derive(Debug, Clone)]
pub struct AuthGate {
    store: Option<Arc<dyn KeyStore>>,
}

impl AuthGate {
    pub fn new(store: Option<Arc<dyn KeyStore>>) -> Self {
        Self { store }
    }

    /// Authenticate the raw header value, if any
    pub async fn authenticate(
        &self,
        api_key: Option<&str>,
    ) -> Result<AuthenticatedKey, DomainError> {
        let key = match api_key.map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => {
                warn!("Request rejected: missing API key");
                return Err(DomainError::unauthorized("API key is required."));
            }
        };

        let Some(store) = &self.store else {
            error!("Key store binding is not configured");
            return Err(DomainError::configuration("Server configuration error."));
        };

        let record = store
            .get::<ApiKeyRecord>(key)
            .await
            .map_err(|e| {
                error!(key_prefix = %key_prefix(key), error = %e, "API key lookup failed");
                DomainError::internal("An error occurred during authentication.")
            })?;

        match record {
            None => {
                warn!(key_prefix = %key_prefix(key), "Request rejected: unknown API key");
                Err(DomainError::forbidden("Invalid API key."))
            }
            Some(record) if !record.is_enabled() => {
                warn!(key_prefix = %key_prefix(key), "Request rejected: disabled API key");
                Err(DomainError::forbidden("API key is disabled."))
            }
            Some(record) => {
                debug!(key_prefix = %key_prefix(key), plan = %record.plan(), "API key authenticated");
                Ok(AuthenticatedKey::new(key, record))
            }
        }
    }
}
