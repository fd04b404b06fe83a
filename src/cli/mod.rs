//! CLI for the fake-data gateway
//!
//! - `serve`: run the HTTP server (default)
//! - `provision-key`: write or delete an API key record in the configured store

pub mod provision_key;
pub mod serve;

use clap::{Parser, Subcommand};

/// Fake data generation API with per-plan rate limiting
#[derive(Parser)]
#[command(name = "fakedata-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Create, update or delete an API key record
    ProvisionKey(provision_key::ProvisionKeyArgs),
}
