use anyhow::Result;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use super::Command;
use crate::curried::sum_chain;

pub struct AddCommand {
    pub numbers: Vec<Decimal>,
}

impl Command for AddCommand {
    fn run<R: BufRead, W: Write>(&self, _input: R, mut output: W) -> Result<()> {
        let total = sum_chain(self.numbers.iter().copied());
        tracing::debug!(count = self.numbers.len(), "Accumulation chain queried");
        writeln!(output, "{}", total.normalize())?;
        Ok(())
    }
}
