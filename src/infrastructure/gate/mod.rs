//! Request gates: authentication, then rate limiting

mod auth;
mod rate_limiter;

pub use auth::AuthGate;
pub use rate_limiter::{FixedWindowRateLimiter, RateDecision, RateStatus};
