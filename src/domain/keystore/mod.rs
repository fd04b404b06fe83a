//! Key store domain - the external record store both gates read and write

mod repository;

pub use repository::{KeyStore, KeyStoreExt};

#[cfg(test)]
pub use repository::mock::MockKeyStore;
