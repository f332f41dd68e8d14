//! Companion sync
//!
//! Weather keys start from fixed initial values so that every field is
//! defined before the first message arrives. They mark every field unknown.

use meridian_protocol::{
    ChannelKey, Tuple, TupleValue, HUMIDITY_UNKNOWN, PRECIP_SLOTS, TEMPERATURE_UNKNOWN,
    WIND_UNKNOWN_TENTHS,
};

const NO_PRECIPITATION: [u8; PRECIP_SLOTS] = [0; PRECIP_SLOTS];

/// Values applied to the store before the companion sends anything
pub fn initial_values() -> [Tuple<'static>; 12] {
    [
        Tuple::new(ChannelKey::Icon, TupleValue::Uint8(0)),
        Tuple::new(ChannelKey::ApparentTemp, TupleValue::Int8(TEMPERATURE_UNKNOWN)),
        Tuple::new(ChannelKey::ApparentTempMax, TupleValue::Int8(TEMPERATURE_UNKNOWN)),
        Tuple::new(ChannelKey::ApparentTempMin, TupleValue::Int8(TEMPERATURE_UNKNOWN)),
        Tuple::new(ChannelKey::Temp, TupleValue::Int8(TEMPERATURE_UNKNOWN)),
        Tuple::new(ChannelKey::TempMax, TupleValue::Int8(TEMPERATURE_UNKNOWN)),
        Tuple::new(ChannelKey::TempMin, TupleValue::Int8(TEMPERATURE_UNKNOWN)),
        Tuple::new(ChannelKey::PrecipProbability, TupleValue::Uint8(0)),
        Tuple::new(ChannelKey::PrecipArray, TupleValue::Bytes(&NO_PRECIPITATION)),
        Tuple::new(ChannelKey::Humidity, TupleValue::Uint8(HUMIDITY_UNKNOWN)),
        Tuple::new(
            ChannelKey::WindSpeed,
            TupleValue::Uint16(WIND_UNKNOWN_TENTHS + 1),
        ),
        Tuple::new(ChannelKey::Report, TupleValue::CString("")),
    ]
}
