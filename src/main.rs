//! aarly-admin: bulk-manage Aarly funding directory records from the CLI

mod api;
mod cli;
mod config;
mod excel;
mod import;
mod schema;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();
    cli::run(cli).await
}
