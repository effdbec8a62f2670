use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

use crate::guessing::DEFAULT_SECRET_UPPER_BOUND;

/// Main configuration structure for Pocket Katas
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PocketKatasConfig {
    /// Guessing game settings
    pub game: GameConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Secrets are drawn from 0 up to (not including) this bound
    pub secret_upper_bound: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (off, error, warn, info, debug, trace), overridden by RUST_LOG
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for PocketKatasConfig {
    fn default() -> Self {
        Self {
            game: GameConfig {
                secret_upper_bound: DEFAULT_SECRET_UPPER_BOUND,
            },
            observability: ObservabilityConfig {
                log_level: "warn".to_string(),
                json_logs: false,
            },
        }
    }
}

pub const CONFIG_FILE_NAME: &str = "pocket-katas.toml";
pub const ENV_PREFIX: &str = "POCKET_KATAS";

impl PocketKatasConfig {
    /// Load configuration from the working directory.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. `pocket-katas.toml` in `dir`
    /// 3. Environment variables (e.g. POCKET_KATAS_GAME__SECRET_UPPER_BOUND)
    pub fn load_from(dir: &Path) -> Result<Self> {
        let builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(dir.join(CONFIG_FILE_NAME)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: PocketKatasConfig = builder
            .build()?
            .try_deserialize()
            .context("Failed to read configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.game.secret_upper_bound == 0 {
            bail!("game.secret_upper_bound must be at least 1");
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.observability.log_level).with_context(|| {
            format!(
                "observability.log_level '{}' is not one of off, error, warn, info, debug, trace",
                self.observability.log_level
            )
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
