use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::Command;
use crate::guessing::{FixedSecret, GuessingGame, ThreadRngSecret};
use crate::telemetry::{create_session_span, generate_session_id};

pub struct GuessCommand {
    pub secret: Option<i64>,
    pub upper: u32,
}

impl GuessCommand {
    fn start_game(&self) -> GuessingGame {
        match self.secret {
            Some(secret) => GuessingGame::with_source(&mut FixedSecret(secret), self.upper),
            None => GuessingGame::with_source(&mut ThreadRngSecret, self.upper),
        }
    }
}

impl Command for GuessCommand {
    fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let session_id = generate_session_id();
        let span = create_session_span("guess", &session_id);
        let _entered = span.enter();

        let mut game = self.start_game();
        for line in input.lines() {
            let line = line.context("Failed to read guess")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Ok(guess) = line.parse::<i64>() else {
                writeln!(output, "'{line}' is not a whole number.")?;
                continue;
            };
            let reply = game.make_guess(guess);
            writeln!(output, "{reply}")?;
            if reply.is_win() {
                break;
            }
        }
        Ok(())
    }
}
