//! Typed tuple values carried in a dictionary
//!
//! A tuple is one key and one typed value. Integers keep their wire width so
//! that encoding reproduces exactly what was decoded.

use crate::keys::ChannelKey;

/// Tuple type tags as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleType {
    /// Raw byte array
    ByteArray,
    /// NUL-terminated UTF-8 string
    CString,
    /// Unsigned little-endian integer, 1, 2 or 4 bytes
    Uint,
    /// Signed little-endian integer, 1, 2 or 4 bytes
    Int,
}

// Wire format values
const TYPE_BYTE_ARRAY: u8 = 0;
const TYPE_CSTRING: u8 = 1;
const TYPE_UINT: u8 = 2;
const TYPE_INT: u8 = 3;

impl TupleType {
    /// Parse a type tag from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            TYPE_BYTE_ARRAY => Some(TupleType::ByteArray),
            TYPE_CSTRING => Some(TupleType::CString),
            TYPE_UINT => Some(TupleType::Uint),
            TYPE_INT => Some(TupleType::Int),
            _ => None,
        }
    }

    /// Convert to wire byte
    pub fn to_byte(self) -> u8 {
        match self {
            TupleType::ByteArray => TYPE_BYTE_ARRAY,
            TupleType::CString => TYPE_CSTRING,
            TupleType::Uint => TYPE_UINT,
            TupleType::Int => TYPE_INT,
        }
    }
}

/// A decoded tuple value, borrowing from the message buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue<'a> {
    Bytes(&'a [u8]),
    /// String without its NUL terminator
    CString(&'a str),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Int8(i8),
    Int16(i16),
    Int32(i32),
}

impl<'a> TupleValue<'a> {
    /// Wire type tag of this value
    pub fn tuple_type(&self) -> TupleType {
        match self {
            TupleValue::Bytes(_) => TupleType::ByteArray,
            TupleValue::CString(_) => TupleType::CString,
            TupleValue::Uint8(_) | TupleValue::Uint16(_) | TupleValue::Uint32(_) => TupleType::Uint,
            TupleValue::Int8(_) | TupleValue::Int16(_) | TupleValue::Int32(_) => TupleType::Int,
        }
    }

    /// Integer value widened to `i64`, or `None` for non-integer tuples
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            TupleValue::Uint8(v) => Some(v as i64),
            TupleValue::Uint16(v) => Some(v as i64),
            TupleValue::Uint32(v) => Some(v as i64),
            TupleValue::Int8(v) => Some(v as i64),
            TupleValue::Int16(v) => Some(v as i64),
            TupleValue::Int32(v) => Some(v as i64),
            TupleValue::Bytes(_) | TupleValue::CString(_) => None,
        }
    }

    /// Number of value bytes on the wire (including the NUL of a cstring)
    pub fn wire_len(&self) -> usize {
        match self {
            TupleValue::Bytes(data) => data.len(),
            TupleValue::CString(text) => text.len() + 1,
            TupleValue::Uint8(_) | TupleValue::Int8(_) => 1,
            TupleValue::Uint16(_) | TupleValue::Int16(_) => 2,
            TupleValue::Uint32(_) | TupleValue::Int32(_) => 4,
        }
    }
}

/// One key-value pair of a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple<'a> {
    /// Raw wire key (may be outside the known key space)
    pub key: u32,
    /// Typed value
    pub value: TupleValue<'a>,
}

impl<'a> Tuple<'a> {
    /// Create a tuple for a known channel key
    pub fn new(key: ChannelKey, value: TupleValue<'a>) -> Self {
        Self {
            key: key.to_u32(),
            value,
        }
    }

    /// The channel key, if the wire key is part of the key space
    pub fn channel_key(&self) -> Option<ChannelKey> {
        ChannelKey::from_u32(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_byte_roundtrip() {
        for ty in [
            TupleType::ByteArray,
            TupleType::CString,
            TupleType::Uint,
            TupleType::Int,
        ] {
            assert_eq!(TupleType::from_byte(ty.to_byte()), Some(ty));
        }
        assert!(TupleType::from_byte(4).is_none());
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(TupleValue::Int8(-5).as_integer(), Some(-5));
        assert_eq!(TupleValue::Uint16(1001).as_integer(), Some(1001));
        assert_eq!(TupleValue::Uint32(u32::MAX).as_integer(), Some(u32::MAX as i64));
        assert_eq!(TupleValue::CString("x").as_integer(), None);
        assert_eq!(TupleValue::Bytes(&[1]).as_integer(), None);
    }

    #[test]
    fn test_wire_len() {
        assert_eq!(TupleValue::CString("abc").wire_len(), 4);
        assert_eq!(TupleValue::Bytes(&[0; 60]).wire_len(), 60);
        assert_eq!(TupleValue::Int16(0).wire_len(), 2);
    }

    #[test]
    fn test_channel_key() {
        let tuple = Tuple::new(ChannelKey::Humidity, TupleValue::Uint8(40));
        assert_eq!(tuple.key, 0x9);
        assert_eq!(tuple.channel_key(), Some(ChannelKey::Humidity));

        let unknown = Tuple {
            key: 0x42,
            value: TupleValue::Uint8(0),
        };
        assert_eq!(unknown.channel_key(), None);
    }
}
