//! Channel keys pushed by the companion app

use crate::tuple::TupleType;

/// Stable key identifiers of the weather/report feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelKey {
    /// Weather icon code (0 = none)
    Icon,
    /// Apparent temperature, °C
    ApparentTemp,
    /// Today's apparent maximum, °C
    ApparentTempMax,
    /// Today's apparent minimum, °C
    ApparentTempMin,
    /// Actual temperature, °C
    Temp,
    /// Today's maximum, °C
    TempMax,
    /// Today's minimum, °C
    TempMin,
    /// Today's precipitation probability, percent
    PrecipProbability,
    /// Per-minute precipitation for the next hour
    PrecipArray,
    /// Relative humidity, percent
    Humidity,
    /// Wind speed in tenths of m/s
    WindSpeed,
    /// Free-text report line
    Report,
}

// Wire format values
const KEY_ICON: u32 = 0x0;
const KEY_APPARENT_TEMP: u32 = 0x1;
const KEY_APPARENT_TEMP_MAX: u32 = 0x2;
const KEY_APPARENT_TEMP_MIN: u32 = 0x3;
const KEY_TEMP: u32 = 0x4;
const KEY_TEMP_MAX: u32 = 0x5;
const KEY_TEMP_MIN: u32 = 0x6;
const KEY_PRECIP_PROBABILITY: u32 = 0x7;
const KEY_PRECIP_ARRAY: u32 = 0x8;
const KEY_HUMIDITY: u32 = 0x9;
const KEY_WIND_SPEED: u32 = 0xA;
const KEY_REPORT: u32 = 0xB;

impl ChannelKey {
    /// Every key, in wire order
    pub const ALL: [ChannelKey; 12] = [
        ChannelKey::Icon,
        ChannelKey::ApparentTemp,
        ChannelKey::ApparentTempMax,
        ChannelKey::ApparentTempMin,
        ChannelKey::Temp,
        ChannelKey::TempMax,
        ChannelKey::TempMin,
        ChannelKey::PrecipProbability,
        ChannelKey::PrecipArray,
        ChannelKey::Humidity,
        ChannelKey::WindSpeed,
        ChannelKey::Report,
    ];

    /// Parse a key from its wire value
    pub fn from_u32(key: u32) -> Option<Self> {
        match key {
            KEY_ICON => Some(ChannelKey::Icon),
            KEY_APPARENT_TEMP => Some(ChannelKey::ApparentTemp),
            KEY_APPARENT_TEMP_MAX => Some(ChannelKey::ApparentTempMax),
            KEY_APPARENT_TEMP_MIN => Some(ChannelKey::ApparentTempMin),
            KEY_TEMP => Some(ChannelKey::Temp),
            KEY_TEMP_MAX => Some(ChannelKey::TempMax),
            KEY_TEMP_MIN => Some(ChannelKey::TempMin),
            KEY_PRECIP_PROBABILITY => Some(ChannelKey::PrecipProbability),
            KEY_PRECIP_ARRAY => Some(ChannelKey::PrecipArray),
            KEY_HUMIDITY => Some(ChannelKey::Humidity),
            KEY_WIND_SPEED => Some(ChannelKey::WindSpeed),
            KEY_REPORT => Some(ChannelKey::Report),
            _ => None,
        }
    }

    /// Convert to wire value
    pub fn to_u32(self) -> u32 {
        match self {
            ChannelKey::Icon => KEY_ICON,
            ChannelKey::ApparentTemp => KEY_APPARENT_TEMP,
            ChannelKey::ApparentTempMax => KEY_APPARENT_TEMP_MAX,
            ChannelKey::ApparentTempMin => KEY_APPARENT_TEMP_MIN,
            ChannelKey::Temp => KEY_TEMP,
            ChannelKey::TempMax => KEY_TEMP_MAX,
            ChannelKey::TempMin => KEY_TEMP_MIN,
            ChannelKey::PrecipProbability => KEY_PRECIP_PROBABILITY,
            ChannelKey::PrecipArray => KEY_PRECIP_ARRAY,
            ChannelKey::Humidity => KEY_HUMIDITY,
            ChannelKey::WindSpeed => KEY_WIND_SPEED,
            ChannelKey::Report => KEY_REPORT,
        }
    }

    /// Tuple type the companion is expected to send for this key
    ///
    /// Integer keys accept both `Int` and `Uint` tags on decode; this is the
    /// tag used when encoding.
    pub fn wire_type(self) -> TupleType {
        match self {
            ChannelKey::ApparentTemp
            | ChannelKey::ApparentTempMax
            | ChannelKey::ApparentTempMin
            | ChannelKey::Temp
            | ChannelKey::TempMax
            | ChannelKey::TempMin => TupleType::Int,
            ChannelKey::Icon
            | ChannelKey::PrecipProbability
            | ChannelKey::Humidity
            | ChannelKey::WindSpeed => TupleType::Uint,
            ChannelKey::PrecipArray => TupleType::ByteArray,
            ChannelKey::Report => TupleType::CString,
        }
    }

    /// Returns true for the six temperature keys
    pub fn is_temperature(&self) -> bool {
        matches!(
            self,
            ChannelKey::ApparentTemp
                | ChannelKey::ApparentTempMax
                | ChannelKey::ApparentTempMin
                | ChannelKey::Temp
                | ChannelKey::TempMax
                | ChannelKey::TempMin
        )
    }
}
