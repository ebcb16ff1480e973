//! Rally CLI Application
//!
//! Command-line interface for the rally group trip coordinator.

mod args;
mod cli;
mod document;
mod openai;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use rally_core::CoordinatorBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let coordinator = CoordinatorBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize coordinator")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(coordinator, renderer);

    info!("Rally started");

    match command {
        Some(Join(args)) => cli.join(args).await,
        Some(Window) => cli.window().await,
        Some(Tally) => cli.tally().await,
        Some(Suggest(args)) => cli.suggest(args).await,
        Some(Finalize(args)) => cli.finalize(args).await,
        Some(List) | None => cli.list().await,
    }
}
