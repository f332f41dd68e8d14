//! Channel identifiers
//!
//! One identifier per independently updated slot of state. Weather channels
//! map one to one onto companion link keys.

use meridian_protocol::ChannelKey;

/// Independently updated state slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Local wall-clock time
    Clock,
    /// Battery charge percentage
    Battery,
    /// Companion connectivity
    Connection,
    /// Current heart rate
    HeartRate,
    /// Walked distance today
    Movement,
    /// Sleep totals today
    Sleep,
    WeatherIcon,
    ApparentTemp,
    ApparentTempMax,
    ApparentTempMin,
    Temp,
    TempMax,
    TempMin,
    PrecipProbability,
    PrecipArray,
    Humidity,
    WindSpeed,
    /// Free-text weather report
    Report,
}

impl Channel {
    /// Check if this channel is one of the six temperatures
    pub fn is_temperature(&self) -> bool {
        matches!(
            self,
            Channel::ApparentTemp
                | Channel::ApparentTempMax
                | Channel::ApparentTempMin
                | Channel::Temp
                | Channel::TempMax
                | Channel::TempMin
        )
    }
}

impl From<ChannelKey> for Channel {
    fn from(key: ChannelKey) -> Self {
        match key {
            ChannelKey::Icon => Channel::WeatherIcon,
            ChannelKey::ApparentTemp => Channel::ApparentTemp,
            ChannelKey::ApparentTempMax => Channel::ApparentTempMax,
            ChannelKey::ApparentTempMin => Channel::ApparentTempMin,
            ChannelKey::Temp => Channel::Temp,
            ChannelKey::TempMax => Channel::TempMax,
            ChannelKey::TempMin => Channel::TempMin,
            ChannelKey::PrecipProbability => Channel::PrecipProbability,
            ChannelKey::PrecipArray => Channel::PrecipArray,
            ChannelKey::Humidity => Channel::Humidity,
            ChannelKey::WindSpeed => Channel::WindSpeed,
            ChannelKey::Report => Channel::Report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_keys_map_to_temperature_channels() {
        for key in ChannelKey::ALL {
            assert_eq!(Channel::from(key).is_temperature(), key.is_temperature());
        }
    }
}
