//! Fake data gateway
//!
//! An HTTP API that generates realistic fake records, with:
//! - API key authentication against a pluggable key store (moka or redis)
//! - Per-plan fixed-window rate limiting
//! - Locale-aware, seed-reproducible generation

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use config::BootstrapKey;
use domain::DomainError;
use domain::api_key::{ApiKeyRecord, key_prefix};
use domain::keystore::{KeyStore, KeyStoreExt};
use infrastructure::keystore::KeyStoreFactory;
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state from configuration
///
/// Opens the configured key store and writes any bootstrap keys into it.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let store_config = config.store.to_key_store_config()?;
    info!(store = %store_config.store_type, "Opening key store");

    let store = KeyStoreFactory::new().create(&store_config).await?;

    let seeded = seed_bootstrap_keys(store.as_ref(), &config.bootstrap_keys).await?;
    if seeded > 0 {
        info!(count = seeded, "Bootstrap API keys written");
    }

    let state = AppState::new(
        Some(store),
        config.rate_limit.plan_limits(),
        config.rate_limit.window(),
    )
    .with_max_count(config.generation.default_max_count);

    Ok(state)
}

/// Write bootstrap records without TTL; returns how many were written
pub async fn seed_bootstrap_keys(
    store: &dyn KeyStore,
    keys: &[BootstrapKey],
) -> Result<usize, DomainError> {
    let mut written = 0;

    for bootstrap in keys {
        let key = bootstrap.key.trim();
        if key.is_empty() {
            continue;
        }

        let mut record = ApiKeyRecord::new(bootstrap.plan.clone());
        if !bootstrap.enabled {
            record = record.disabled();
        }

        store.put(key, &record, None).await?;
        info!(key_prefix = %key_prefix(key), plan = %record.plan, "Bootstrap key written");
        written += 1;
    }

    Ok(written)
}
