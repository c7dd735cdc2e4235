use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::app::{App, Commands};
use crate::env::SassmodEnv;

mod cli;
mod config;
mod env;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("SASSMOD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = App::parse();
    let env = SassmodEnv::new()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async move {
        match app.cmd {
            Commands::Resolve(arg) => arg.run(&env).await,
            Commands::Config(arg) => arg.run(&env),
        }
    })
}
