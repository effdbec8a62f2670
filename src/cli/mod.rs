use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;

pub mod commands;

#[derive(Parser)]
#[command(name = "pocket-katas")]
#[command(about = "Three pocket-sized stateful katas: a PIN-gated account, a curried adder and a guessing game")]
#[command(long_about = "Pocket Katas drives small stateful exercises from the terminal. \
                       Account and guess sessions read one command per line from stdin; \
                       replies are printed to stdout and logs go to stderr.")]
pub struct Cli {
    /// Override the configured log level (RUST_LOG still wins)
    #[arg(long, global = true, help = "Log level: error, warn, info, debug, trace")]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open an account and run PIN-gated commands read from stdin
    Account {
        /// PIN the account is opened with
        #[arg(long, help = "Initial PIN for the account")]
        pin: String,
        /// Opening balance
        #[arg(long, allow_negative_numbers = true, help = "Opening balance (defaults to 0)")]
        balance: Option<Decimal>,
    },
    /// Run a curried addition chain over the given numbers and print the total
    Add {
        /// Numbers fed to the chain one call at a time
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<Decimal>,
    },
    /// Play the guessing game with guesses read from stdin
    Guess {
        /// Fix the secret instead of drawing it
        #[arg(long, allow_negative_numbers = true, help = "Use this secret instead of a random one")]
        secret: Option<i64>,
        /// Upper bound (exclusive) for the random secret
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Draw the secret from 0 up to this bound (exclusive, at least 1)"
        )]
        upper: Option<u32>,
    },
    /// Print the effective configuration as TOML
    Config,
}
