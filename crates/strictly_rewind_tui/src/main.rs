//! Strictly Rewind - unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_rewind_tui::{Cli, Command, Settings, logging, play, replay};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            logging::init_file(settings.log())?;
            play::run(&settings)
        }
        Command::Replay {
            inputs,
            json,
            descending,
        } => {
            logging::init_stderr(settings.log());
            let settings = settings.with_descending(descending);
            info!(count = inputs.len(), json, "Replaying inputs");

            let game = replay::replay(&inputs, settings.order())?;
            let view = game.view();
            if json {
                println!("{}", replay::render_json(&view)?);
            } else {
                print!("{}", replay::render_text(&view));
            }
            Ok(())
        }
    }
}
