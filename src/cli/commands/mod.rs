use anyhow::Result;
use std::io::{BufRead, Write};

pub mod account;
pub mod add;
pub mod config;
pub mod guess;

pub use account::{AccountCommand, CommandParseError, SessionLine};
pub use add::AddCommand;
pub use config::ConfigCommand;
pub use guess::GuessCommand;

/// A CLI command reading lines from `input` and writing replies to `output`.
pub trait Command {
    fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<()>;

    /// Run against the process's stdin and stdout.
    fn execute(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }
}
