//! Configuration type definitions
//!
//! `WatchfaceConfig` is the complete set of user-tunable settings. It can be
//! stored as postcard-serialized binary data (feature `serde`).

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of the fixed message line
pub const MAX_MESSAGE_LEN: usize = 32;

/// Default message shown in the top-right corner
pub const DEFAULT_MESSAGE: &str = "This is not normal!";

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Binary data could not be decoded
    Decode,
    /// Screen is too small for the fixed layout
    ScreenTooSmall,
    /// Low-battery threshold above 100%
    InvalidThreshold,
    /// Stale age is outside the precipitation window
    InvalidStaleAge,
}

/// Display dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScreenSize {
    pub width: u16,
    pub height: u16,
}

impl ScreenSize {
    /// Smallest screen the fixed layout fits on
    pub const MIN: ScreenSize = ScreenSize {
        width: 110,
        height: 115,
    };
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 144,
            height: 168,
        }
    }
}

/// Watchface configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WatchfaceConfig {
    /// Screen dimensions
    pub screen: ScreenSize,
    /// Battery percentage at or below which the gauge is highlighted
    pub low_battery_percent: u8,
    /// Minutes after which the precipitation graph shows the stale marker
    pub stale_after_minutes: u8,
    /// Fixed message line
    pub message: String<MAX_MESSAGE_LEN>,
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        let mut message = String::new();
        let _ = message.push_str(DEFAULT_MESSAGE);
        Self {
            screen: ScreenSize::default(),
            low_battery_percent: 5,
            stale_after_minutes: 15,
            message,
        }
    }
}

impl WatchfaceConfig {
    /// Check values the renderers rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width < ScreenSize::MIN.width || self.screen.height < ScreenSize::MIN.height
        {
            return Err(ConfigError::ScreenTooSmall);
        }
        if self.low_battery_percent > 100 {
            return Err(ConfigError::InvalidThreshold);
        }
        if self.stale_after_minutes as usize >= meridian_protocol::PRECIP_SLOTS {
            return Err(ConfigError::InvalidStaleAge);
        }
        Ok(())
    }

    /// Decode and validate a postcard-serialized configuration
    #[cfg(feature = "serde")]
    pub fn from_postcard(data: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(data).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
