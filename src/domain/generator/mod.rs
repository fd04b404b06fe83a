//! Fake-data generation: locales, seeds and generation contexts

mod cache;
pub mod catalog;
mod context;
mod finance;
mod locale;
mod seed;
mod temporal;
mod text;

pub use cache::{ContextFactory, InstanceCache, SharedContext};
pub use context::GeneratorContext;
pub use finance::{CardIssuer, luhn_valid};
pub use locale::{DEFAULT_LOCALE, Locale};
pub use seed::{SeedValue, string_hash};
pub use temporal::{DateFormat, to_iso};
pub use text::{LoremKind, ReadableContext};
