//! Resolves (locale, seed) to a generation context

use std::sync::{Arc, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::generator::{GeneratorContext, InstanceCache, Locale, SeedValue, SharedContext};
use crate::domain::DomainError;

use super::cache::InMemoryInstanceCache;

/// A context checked out for one request
#[derive(Debug)]
pub enum GeneratorHandle {
    /// Cached unseeded instance shared with other requests
    Shared(SharedContext),
    /// Seeded instance owned by this request
    Owned(GeneratorContext),
}

impl GeneratorHandle {
    /// Run `draw` against the context
    ///
    /// A shared instance stays locked for the duration of `draw`, which
    /// must not await.
    pub fn with<R>(&mut self, draw: impl FnOnce(&mut GeneratorContext) -> R) -> R {
        match self {
            Self::Shared(shared) => {
                let mut guard: MutexGuard<'_, GeneratorContext> =
                    shared.lock().unwrap_or_else(PoisonError::into_inner);
                draw(&mut guard)
            }
            Self::Owned(context) => draw(context),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

/// Hands out cached generators for unseeded requests and fresh ones for seeded requests
#[derive(Debug, Clone)]
pub struct GeneratorInstanceManager {
    cache: Arc<dyn InstanceCache>,
}

impl Default for GeneratorInstanceManager {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryInstanceCache::new()))
    }
}

impl GeneratorInstanceManager {
    pub fn new(cache: Arc<dyn InstanceCache>) -> Self {
        Self { cache }
    }

    /// Resolve request input to a context
    pub fn resolve(
        &self,
        locale: Option<&str>,
        seed: Option<&SeedValue>,
    ) -> Result<GeneratorHandle, DomainError> {
        let locale = Locale::resolve(locale)?;

        match seed {
            Some(seed) => {
                let derived = seed.derive();
                debug!(locale = %locale, seed = derived, "Using seeded generator");
                Ok(GeneratorHandle::Owned(GeneratorContext::seeded(locale, derived)))
            }
            None => Ok(GeneratorHandle::Shared(
                self.cache.get_or_create(locale, GeneratorContext::new),
            )),
        }
    }

    /// Drop all cached instances
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn cached_locales(&self) -> usize {
        self.cache.len()
    }
}
