//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with a time-travelling move list
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Feed scripted inputs into a game and print the result
    Replay {
        /// Inputs: N or cN clicks cell N (0-8), jN jumps to step N, t toggles order
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Start with the move list in descending order
        #[arg(long)]
        descending: bool,
    },
}
