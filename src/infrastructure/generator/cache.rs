//! Process-local instance cache

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::domain::generator::{ContextFactory, InstanceCache, Locale, SharedContext};

/// Locale-keyed map of shared generators
#[derive(Debug, Default)]
pub struct InMemoryInstanceCache {
    instances: RwLock<HashMap<Locale, SharedContext>>,
}

impl InMemoryInstanceCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InstanceCache for InMemoryInstanceCache {
    fn get_or_create(&self, locale: Locale, create: ContextFactory) -> SharedContext {
        if let Some(existing) = self
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&locale)
        {
            return existing.clone();
        }

        let mut instances = self
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // Another request may have created it between the two locks
        instances
            .entry(locale)
            .or_insert_with(|| {
                tracing::debug!(locale = %locale, "Creating cached generator");
                Arc::new(Mutex::new(create(locale)))
            })
            .clone()
    }

    fn clear(&self) {
        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
