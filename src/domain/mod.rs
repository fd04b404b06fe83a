//! Domain layer - entities, store seams and pure gatekeeping logic

pub mod api_key;
pub mod clock;
pub mod count;
pub mod error;
pub mod generator;
pub mod keystore;
pub mod parse;
pub mod rate_limit;

pub use api_key::{ApiKeyRecord, AuthenticatedKey};
pub use clock::{Clock, SystemClock};
pub use count::CountValidator;
pub use error::DomainError;
pub use keystore::{KeyStore, KeyStoreExt};
pub use rate_limit::{FixedWindow, PlanLimits, RateWindow, WindowVerdict};
