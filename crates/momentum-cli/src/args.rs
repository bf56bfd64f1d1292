use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GoalCommands, StepCommands};

/// Momentum: break fitness goals into steps and keep moving
///
/// Goals and their steps are saved after every change. Without a subcommand
/// the dashboard and the goal list are shown.
#[derive(Parser)]
#[command(version, about, name = "momentum")]
pub struct Args {
    /// Directory holding the JSON save file. Defaults to
    /// $XDG_DATA_HOME/momentum/
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Save to a SQLite database file instead of JSON
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Momentum CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage goals
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Manage steps within goals
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Show totals across all goals
    Stats,
}
