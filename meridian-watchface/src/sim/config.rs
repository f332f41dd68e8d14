//! Simulator configuration
//!
//! Reads a `WatchfaceConfig` from a TOML file. Missing keys keep their
//! defaults.

use std::path::Path;

use meridian_core::config::{ConfigError, WatchfaceConfig};

use crate::fmt::info;

/// Errors loading the simulator configuration
#[derive(Debug)]
pub enum SimConfigError {
    /// File could not be read
    Io(std::io::Error),
    /// TOML parsing failed
    Parse(toml::de::Error),
    /// Values failed validation
    Invalid(ConfigError),
}

impl From<std::io::Error> for SimConfigError {
    fn from(e: std::io::Error) -> Self {
        SimConfigError::Io(e)
    }
}

impl From<toml::de::Error> for SimConfigError {
    fn from(e: toml::de::Error) -> Self {
        SimConfigError::Parse(e)
    }
}

impl From<ConfigError> for SimConfigError {
    fn from(e: ConfigError) -> Self {
        SimConfigError::Invalid(e)
    }
}

/// Parse and validate TOML configuration text
pub fn parse_config(text: &str) -> Result<WatchfaceConfig, SimConfigError> {
    let config: WatchfaceConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<WatchfaceConfig, SimConfigError> {
    let text = std::fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}
