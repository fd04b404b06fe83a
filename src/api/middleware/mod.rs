//! API middleware components

pub mod gate;
pub mod logging;
pub mod metrics;

pub use gate::{API_KEY_HEADER, auth_middleware, extract_api_key_from_headers, rate_limit_middleware};
pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
