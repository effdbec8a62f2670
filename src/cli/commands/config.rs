use anyhow::Result;
use std::io::{BufRead, Write};

use super::Command;
use crate::config::PocketKatasConfig;

pub struct ConfigCommand {
    pub config: PocketKatasConfig,
}

impl Command for ConfigCommand {
    fn run<R: BufRead, W: Write>(&self, _input: R, mut output: W) -> Result<()> {
        write!(output, "{}", self.config.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_toml_sections() {
        let command = ConfigCommand {
            config: PocketKatasConfig::default(),
        };
        let mut out = Vec::new();
        command.run(std::io::BufReader::new(std::io::empty()), &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("[game]"));
        assert!(rendered.contains("secret_upper_bound = 100"));
        assert!(rendered.contains("[observability]"));
    }
}
