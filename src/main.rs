use clap::Parser;
use fakedata_gateway::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cli::serve::run().await,
        Command::ProvisionKey(args) => cli::provision_key::run(args).await,
    }
}
