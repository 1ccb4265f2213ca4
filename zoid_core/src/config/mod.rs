//! Configuration loading - Battle constants from TOML, Zoid roster from JSON

mod constants;
mod roster;

pub use constants::{
    AiConstants, AttackConstants, BandDistances, BattleConstants, DetectionConstants,
    MovementConstants, RangeConstants,
};
pub use roster::{default_roster, filter_for_terrain, load_roster, parse_roster};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse roster JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

impl BattleConstants {
    /// Load battle constants from a TOML file, validating them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let rules: BattleConstants = load_toml(path)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Parse battle constants from a TOML string, validating them
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let rules: BattleConstants = parse_toml(content)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject constants that would break range banding or severity tiers
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range.close_max <= 0.0 || self.range.mid_max <= self.range.close_max {
            return Err(ConfigError::ValidationError(format!(
                "range thresholds must satisfy 0 < close_max < mid_max (got {} and {})",
                self.range.close_max, self.range.mid_max
            )));
        }
        if self.attack.tier_width <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "tier_width must be positive (got {})",
                self.attack.tier_width
            )));
        }
        if !(0.0..=180.0).contains(&self.attack.shield_arc_degrees) {
            return Err(ConfigError::ValidationError(format!(
                "shield_arc_degrees must lie in [0, 180] (got {})",
                self.attack.shield_arc_degrees
            )));
        }
        Ok(())
    }
}
