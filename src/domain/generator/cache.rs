//! Storage seam for long-lived unseeded generators

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use super::context::GeneratorContext;
use super::locale::Locale;

/// A generator shared by every unseeded request for one locale
pub type SharedContext = Arc<Mutex<GeneratorContext>>;

/// Builds the context stored on first use of a locale
pub type ContextFactory = fn(Locale) -> GeneratorContext;

/// Locale-to-instance cache used by the generator manager
pub trait InstanceCache: Send + Sync + Debug {
    /// Cached instance for `locale`, created with `create` when missing
    ///
    /// Concurrent first calls must all observe the same stored instance.
    fn get_or_create(&self, locale: Locale, create: ContextFactory) -> SharedContext;

    /// Drop every cached instance
    fn clear(&self);

    /// Number of cached locales
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
