use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::api_key::DEFAULT_PLAN;
use crate::domain::count::DEFAULT_MAX_COUNT;
use crate::domain::rate_limit::{FixedWindow, PlanLimits};
use crate::infrastructure::keystore::{KeyStoreConfig, KeyStoreType};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub rate_limit: RateLimitConfig,
    pub generation: GenerationConfig,
    pub metrics: MetricsConfig,
    pub test_support: TestSupportConfig,
    /// Records written to the store at startup
    pub bootstrap_keys: Vec<BootstrapKey>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// `in_memory` or `redis`
    pub kind: String,
    pub redis_url: Option<String>,
    pub key_prefix: Option<String>,
    /// In-memory only; bounds rate windows, never API key records
    pub max_capacity: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    /// Requests per window by plan name
    pub plans: HashMap<String, u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub default_max_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestSupportConfig {
    /// Mounts the unauthenticated rate-limit reset endpoint
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapKey {
    pub key: String,
    #[serde(default = "default_plan")]
    pub plan: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_plan() -> String {
    DEFAULT_PLAN.to_string()
}

fn default_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: KeyStoreType::InMemory.to_string(),
            redis_url: None,
            key_prefix: None,
            max_capacity: 100_000,
        }
    }
}

impl StoreConfig {
    pub fn to_key_store_config(&self) -> Result<KeyStoreConfig, crate::domain::DomainError> {
        Ok(KeyStoreConfig {
            store_type: self.kind.parse()?,
            redis_url: self.redis_url.clone(),
            key_prefix: self.key_prefix.clone(),
            max_capacity: Some(self.max_capacity),
        })
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 60,
            plans: HashMap::from([
                ("test".to_string(), 1000),
                ("free".to_string(), 5),
                ("pro".to_string(), 100),
                (DEFAULT_PLAN.to_string(), 5),
            ]),
        }
    }
}

impl RateLimitConfig {
    pub fn plan_limits(&self) -> PlanLimits {
        PlanLimits::new(self.plans.clone())
    }

    pub fn window(&self) -> FixedWindow {
        FixedWindow::new(Duration::from_secs(self.window_secs.max(1)))
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_max_count: DEFAULT_MAX_COUNT,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
