//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every section is optional; missing values fall back to the game's
//! built-in constants.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::host::SpinTrigger;
use crate::strategy::{WagerConfig, DEFAULT_SCORE_CEILING};
use crate::types::SmartSpinError;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub wager: WagerSettings,
    pub trigger: TriggerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WagerSettings {
    pub score_ceiling: i32,
}

impl Default for WagerSettings {
    fn default() -> Self {
        Self {
            score_ceiling: DEFAULT_SCORE_CEILING,
        }
    }
}

/// Identifies the menu the wager should be pre-filled into.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TriggerConfig {
    /// Festival during which the wheel is available.
    pub festival_id: String,
    /// Dialogue question that precedes the wager menu.
    pub question_key: String,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        let trigger = SpinTrigger::default();
        Self {
            festival_id: trigger.festival_id,
            question_key: trigger.question_key,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "smartspin=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            warn!(path, "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.wager.score_ceiling < 0 {
            return Err(SmartSpinError::Config(format!(
                "wager.score_ceiling must be non-negative, got {}",
                self.wager.score_ceiling
            ))
            .into());
        }
        if self.trigger.festival_id.is_empty() || self.trigger.question_key.is_empty() {
            return Err(SmartSpinError::Config(
                "trigger.festival_id and trigger.question_key must be set".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Sizing configuration for the calculator.
    pub fn wager_config(&self) -> WagerConfig {
        WagerConfig {
            score_ceiling: self.wager.score_ceiling,
        }
    }

    /// Trigger filter for the menu hook.
    pub fn spin_trigger(&self) -> SpinTrigger {
        SpinTrigger {
            festival_id: self.trigger.festival_id.clone(),
            question_key: self.trigger.question_key.clone(),
        }
    }
}
