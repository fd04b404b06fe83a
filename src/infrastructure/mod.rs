//! Infrastructure layer - store backends, gates and process plumbing

pub mod gate;
pub mod generator;
pub mod keystore;
pub mod logging;
pub mod observability;
