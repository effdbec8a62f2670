use anyhow::Result;
use clap::Parser;

use pocket_katas::cli::commands::{
    AccountCommand, AddCommand, Command, ConfigCommand, GuessCommand,
};
use pocket_katas::cli::{Cli, Commands};
use pocket_katas::{init_telemetry, PocketKatasConfig};

fn main() -> Result<()> {
    PocketKatasConfig::load_env_file()?;
    let cli = Cli::parse();
    let config = PocketKatasConfig::load()?;

    let log_level = match cli.log_level {
        Some(level) => level,
        None => config.log_level_filter()?,
    };
    init_telemetry(log_level, config.observability.json_logs)?;

    match cli.command {
        Commands::Account { pin, balance } => AccountCommand { pin, balance }.execute(),
        Commands::Add { numbers } => AddCommand { numbers }.execute(),
        Commands::Guess { secret, upper } => GuessCommand {
            secret,
            upper: upper.unwrap_or(config.game.secret_upper_bound),
        }
        .execute(),
        Commands::Config => ConfigCommand { config }.execute(),
    }
}
