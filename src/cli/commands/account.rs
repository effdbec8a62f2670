use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

use super::Command;
use crate::account::{create_account, message, Account};
use crate::telemetry::{create_session_span, generate_session_id};

pub const USAGE: &str = "Commands: verify <pin> | balance <pin> | deposit <pin> <amount> | \
                         withdraw <pin> <amount> | change-pin <pin> <new-pin>";

/// One line of an account session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLine {
    Verify { pin: String },
    Balance { pin: String },
    Deposit { pin: String, amount: Decimal },
    Withdraw { pin: String, amount: Decimal },
    ChangePin { pin: String, new_pin: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    WrongArity {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
}

fn parse_amount(raw: &str) -> Result<Decimal, CommandParseError> {
    Decimal::from_str(raw).map_err(|_| CommandParseError::InvalidAmount(raw.to_string()))
}

impl FromStr for SessionLine {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["verify", pin] => Ok(SessionLine::Verify {
                pin: pin.to_string(),
            }),
            ["balance", pin] => Ok(SessionLine::Balance {
                pin: pin.to_string(),
            }),
            ["deposit", pin, amount] => Ok(SessionLine::Deposit {
                pin: pin.to_string(),
                amount: parse_amount(amount)?,
            }),
            ["withdraw", pin, amount] => Ok(SessionLine::Withdraw {
                pin: pin.to_string(),
                amount: parse_amount(amount)?,
            }),
            ["change-pin", pin, new_pin] => Ok(SessionLine::ChangePin {
                pin: pin.to_string(),
                new_pin: new_pin.to_string(),
            }),
            ["verify", ..] => Err(CommandParseError::WrongArity {
                command: "verify",
                expected: "<pin>",
            }),
            ["balance", ..] => Err(CommandParseError::WrongArity {
                command: "balance",
                expected: "<pin>",
            }),
            ["deposit", ..] => Err(CommandParseError::WrongArity {
                command: "deposit",
                expected: "<pin> <amount>",
            }),
            ["withdraw", ..] => Err(CommandParseError::WrongArity {
                command: "withdraw",
                expected: "<pin> <amount>",
            }),
            ["change-pin", ..] => Err(CommandParseError::WrongArity {
                command: "change-pin",
                expected: "<pin> <new-pin>",
            }),
            [other, ..] => Err(CommandParseError::UnknownCommand(other.to_string())),
            [] => Err(CommandParseError::UnknownCommand(String::new())),
        }
    }
}

impl SessionLine {
    /// Apply the command to `account` and return the reply to print.
    pub fn apply(&self, account: &mut Account) -> String {
        match self {
            SessionLine::Verify { pin } => account.verify_pin(pin).to_string(),
            SessionLine::Balance { pin } => message(&account.check_balance(pin)),
            SessionLine::Deposit { pin, amount } => message(&account.deposit(pin, *amount)),
            SessionLine::Withdraw { pin, amount } => message(&account.withdraw(pin, *amount)),
            SessionLine::ChangePin { pin, new_pin } => {
                message(&account.change_pin(pin, new_pin))
            }
        }
    }
}

pub struct AccountCommand {
    pub pin: String,
    pub balance: Option<Decimal>,
}

impl AccountCommand {
    pub fn new(pin: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            balance: None,
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Some(balance);
        self
    }
}

impl Command for AccountCommand {
    fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let session_id = generate_session_id();
        let span = create_session_span("account", &session_id);
        let _entered = span.enter();

        let mut account = create_account(self.pin.as_str(), self.balance);
        for line in input.lines() {
            let line = line.context("Failed to read account command")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.parse::<SessionLine>() {
                Ok(command) => writeln!(output, "{}", command.apply(&mut account))?,
                Err(e) => {
                    tracing::debug!(error = %e, "Unparseable account command");
                    writeln!(output, "{e}. {USAGE}")?;
                }
            }
        }
        Ok(())
    }
}
