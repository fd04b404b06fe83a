//! Request and response types

pub mod error;
pub mod query;

pub use error::{ApiError, ErrorBody, RATE_LIMIT_LIMIT_HEADER};
pub use query::DataQuery;
