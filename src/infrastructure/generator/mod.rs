//! Generator instance management

mod cache;
mod manager;

pub use cache::InMemoryInstanceCache;
pub use manager::{GeneratorHandle, GeneratorInstanceManager};
