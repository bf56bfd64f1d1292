//! Momentum CLI Application
//!
//! Command-line front end for the Momentum fitness goal tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use momentum_core::GoalStoreBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        database_file,
        in_memory,
        no_color,
        command,
    } = Args::parse();

    let mut builder = GoalStoreBuilder::new()
        .with_data_dir(data_dir)
        .with_database_path(database_file);
    if in_memory {
        builder = builder.in_memory();
    }
    let store = builder.build().context("Failed to open goal storage")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Momentum started");

    let mut cli = Cli::new(store, renderer);
    match command {
        Some(Goal { command }) => cli.handle_goal_command(command)?,
        Some(Step { command }) => cli.handle_step_command(command)?,
        Some(Stats) => cli.show_dashboard()?,
        None => {
            cli.show_dashboard()?;
            cli.list_goals()?;
        }
    }

    cli.finish()
}
