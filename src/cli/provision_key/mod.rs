//! Provision-key command - writes API key records out of band

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::KeyStore;
use crate::domain::api_key::{ApiKeyRecord, DEFAULT_PLAN, key_prefix};
use crate::domain::keystore::KeyStoreExt;
use crate::infrastructure::keystore::KeyStoreFactory;
use crate::infrastructure::logging::init_logging;

#[derive(Debug, Clone, Args)]
pub struct ProvisionKeyArgs {
    /// Raw API key the record is stored under
    #[arg(long)]
    pub key: String,

    /// Plan name selecting the rate limit
    #[arg(long, default_value = DEFAULT_PLAN)]
    pub plan: String,

    /// Store the record disabled
    #[arg(long)]
    pub disabled: bool,

    /// Remove the record instead of writing it
    #[arg(long, conflicts_with_all = ["plan", "disabled"])]
    pub delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Written(ApiKeyRecord),
    Deleted,
    NotFound,
}

/// Load configuration, open the store and apply `args`
pub async fn run(args: ProvisionKeyArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let store_config = config.store.to_key_store_config()?;
    let store = KeyStoreFactory::new().create(&store_config).await?;

    match provision(store.as_ref(), &args).await? {
        ProvisionOutcome::Written(record) => println!(
            "Stored key {}... (plan: {}, enabled: {})",
            key_prefix(&args.key),
            record.plan,
            record.enabled
        ),
        ProvisionOutcome::Deleted => println!("Deleted key {}...", key_prefix(&args.key)),
        ProvisionOutcome::NotFound => println!("Key {}... not found", key_prefix(&args.key)),
    }

    Ok(())
}

/// Write or delete the record; records never expire
pub async fn provision(
    store: &dyn KeyStore,
    args: &ProvisionKeyArgs,
) -> anyhow::Result<ProvisionOutcome> {
    let key = args.key.trim();
    if key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    if args.delete {
        let existed = store.delete(key).await?;
        info!(key_prefix = %key_prefix(key), existed, "API key record deleted");

        return Ok(if existed {
            ProvisionOutcome::Deleted
        } else {
            ProvisionOutcome::NotFound
        });
    }

    let mut record = ApiKeyRecord::new(args.plan.clone());
    if args.disabled {
        record = record.disabled();
    }

    store.put(key, &record, None).await?;
    info!(key_prefix = %key_prefix(key), plan = %record.plan, "API key record written");

    Ok(ProvisionOutcome::Written(record))
}
