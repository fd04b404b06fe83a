//! API layer - HTTP endpoints and middleware

pub mod data;
pub mod docs;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod test_support;
pub mod types;

pub use router::{RouterOptions, create_router_with_options, create_router_with_state};
pub use state::AppState;
