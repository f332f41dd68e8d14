//! Weather update validation
//!
//! Converts decoded tuples into typed updates. A tuple whose type tag or
//! value falls outside its key's domain is rejected and must be discarded
//! without touching the state. Wire sentinels become `None` here.

use meridian_protocol::{
    ChannelKey, Tuple, TupleValue, HUMIDITY_UNKNOWN, PRECIP_SLOTS, PROBABILITY_MAX,
    TEMPERATURE_UNKNOWN, WIND_UNKNOWN_TENTHS,
};

use super::channel::Channel;
use crate::weather::{TemperatureField, WeatherIcon};

/// Reasons a weather tuple is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateError {
    /// Key is not part of the key space
    UnknownKey(u32),
    /// Type tag not accepted for this key
    WrongType(ChannelKey),
    /// Value outside the key's domain
    OutOfRange(ChannelKey),
    /// Array longer than the key allows
    TooLong(ChannelKey),
}

/// A validated weather update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherUpdate<'a> {
    Icon(WeatherIcon),
    Temperature(TemperatureField, Option<i8>),
    PrecipProbability(u8),
    /// Up to 60 probabilities, each 0-100
    PrecipArray(&'a [u8]),
    Humidity(Option<u8>),
    /// Tenths of m/s
    Wind(Option<u16>),
    /// Report text, possibly longer than the store keeps
    Report(&'a str),
}

fn temperature_field(key: ChannelKey) -> Option<TemperatureField> {
    match key {
        ChannelKey::ApparentTemp => Some(TemperatureField::Apparent),
        ChannelKey::ApparentTempMax => Some(TemperatureField::ApparentMax),
        ChannelKey::ApparentTempMin => Some(TemperatureField::ApparentMin),
        ChannelKey::Temp => Some(TemperatureField::Actual),
        ChannelKey::TempMax => Some(TemperatureField::ActualMax),
        ChannelKey::TempMin => Some(TemperatureField::ActualMin),
        _ => None,
    }
}

fn integer(key: ChannelKey, value: &TupleValue<'_>) -> Result<i64, UpdateError> {
    value.as_integer().ok_or(UpdateError::WrongType(key))
}

fn in_range<T: TryFrom<i64>>(key: ChannelKey, value: i64) -> Result<T, UpdateError> {
    T::try_from(value).map_err(|_| UpdateError::OutOfRange(key))
}

impl<'a> WeatherUpdate<'a> {
    /// Validate a decoded tuple against its key's domain
    pub fn from_tuple(tuple: &Tuple<'a>) -> Result<Self, UpdateError> {
        let key = tuple.channel_key().ok_or(UpdateError::UnknownKey(tuple.key))?;
        let value = tuple.value;

        if let Some(field) = temperature_field(key) {
            let raw: i8 = in_range(key, integer(key, &value)?)?;
            let temp = (raw != TEMPERATURE_UNKNOWN).then_some(raw);
            return Ok(WeatherUpdate::Temperature(field, temp));
        }

        match key {
            ChannelKey::Icon => {
                let code: u8 = in_range(key, integer(key, &value)?)?;
                WeatherIcon::from_code(code)
                    .map(WeatherUpdate::Icon)
                    .ok_or(UpdateError::OutOfRange(key))
            }
            ChannelKey::PrecipProbability => {
                let percent: u8 = in_range(key, integer(key, &value)?)?;
                if percent > PROBABILITY_MAX {
                    return Err(UpdateError::OutOfRange(key));
                }
                Ok(WeatherUpdate::PrecipProbability(percent))
            }
            ChannelKey::PrecipArray => {
                let TupleValue::Bytes(values) = value else {
                    return Err(UpdateError::WrongType(key));
                };
                if values.len() > PRECIP_SLOTS {
                    return Err(UpdateError::TooLong(key));
                }
                if values.iter().any(|&v| v > PROBABILITY_MAX) {
                    return Err(UpdateError::OutOfRange(key));
                }
                Ok(WeatherUpdate::PrecipArray(values))
            }
            ChannelKey::Humidity => {
                let percent: u8 = in_range(key, integer(key, &value)?)?;
                Ok(WeatherUpdate::Humidity(
                    (percent < HUMIDITY_UNKNOWN).then_some(percent),
                ))
            }
            ChannelKey::WindSpeed => {
                let tenths: u16 = in_range(key, integer(key, &value)?)?;
                Ok(WeatherUpdate::Wind(
                    (tenths < WIND_UNKNOWN_TENTHS).then_some(tenths),
                ))
            }
            ChannelKey::Report => match value {
                TupleValue::CString(text) => Ok(WeatherUpdate::Report(text)),
                _ => Err(UpdateError::WrongType(key)),
            },
            // Temperatures are handled above
            _ => Err(UpdateError::WrongType(key)),
        }
    }

    /// Channel this update writes
    pub fn channel(&self) -> Channel {
        match self {
            WeatherUpdate::Icon(_) => Channel::WeatherIcon,
            WeatherUpdate::Temperature(field, _) => match field {
                TemperatureField::Apparent => Channel::ApparentTemp,
                TemperatureField::ApparentMax => Channel::ApparentTempMax,
                TemperatureField::ApparentMin => Channel::ApparentTempMin,
                TemperatureField::Actual => Channel::Temp,
                TemperatureField::ActualMax => Channel::TempMax,
                TemperatureField::ActualMin => Channel::TempMin,
            },
            WeatherUpdate::PrecipProbability(_) => Channel::PrecipProbability,
            WeatherUpdate::PrecipArray(_) => Channel::PrecipArray,
            WeatherUpdate::Humidity(_) => Channel::Humidity,
            WeatherUpdate::Wind(_) => Channel::WindSpeed,
            WeatherUpdate::Report(_) => Channel::Report,
        }
    }
}
