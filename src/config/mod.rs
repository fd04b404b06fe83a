//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, BootstrapKey, GenerationConfig, LogFormat, LoggingConfig, MetricsConfig,
    RateLimitConfig, ServerConfig, StoreConfig, TestSupportConfig,
};
