//! Rewind - tic-tac-toe with a time-travel move history.

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, Command, RewindConfig, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(&cli.config)?
        .with_overrides(cli.log_file.clone(), cli.log_level.clone());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(config.log_file(), config.log_level())?;
            let palette = config.theme().palette()?;
            info!(config = ?config, "Configuration resolved");
            tui::run(palette)
        }
        Command::Replay { cells, jump, json } => {
            logging::init_stderr(config.log_level());
            println!("{}", replay::run(&cells, jump, json)?);
            Ok(())
        }
    }
}
