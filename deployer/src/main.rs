use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use deployer::{deploy, Cli, DeployConfig};

fn run() -> anyhow::Result<()> {
    let config = DeployConfig::try_from(Cli::parse())?;
    deploy(&config)?;
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}
