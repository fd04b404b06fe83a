//! API key domain
//!
//! Records that authorize callers and name the plan their rate budget
//! is drawn from.

mod entity;

pub use entity::{ApiKeyRecord, AuthenticatedKey, DEFAULT_PLAN, key_prefix};
