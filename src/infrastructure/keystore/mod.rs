//! Key store backends

mod factory;
mod in_memory;
mod redis;

pub use factory::{KeyStoreConfig, KeyStoreFactory, KeyStoreType};
pub use in_memory::{InMemoryKeyStore, InMemoryKeyStoreConfig};
pub use self::redis::{RedisKeyStore, RedisKeyStoreConfig};
