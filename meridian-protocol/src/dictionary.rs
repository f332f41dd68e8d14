//! Dictionary encoding and decoding for companion messages.
//!
//! Message format:
//! - COUNT (1 byte): number of tuples
//! - per tuple:
//!   - KEY (4 bytes, little endian)
//!   - TYPE (1 byte): see [`TupleType`]
//!   - LENGTH (2 bytes, little endian): value length in bytes
//!   - VALUE (LENGTH bytes)
//!
//! Cstring values include their NUL terminator in LENGTH. Integer values are
//! 1, 2 or 4 bytes wide.

use heapless::Vec;

use crate::tuple::{Tuple, TupleType, TupleValue};

/// Maximum message size in bytes, in either direction
pub const MESSAGE_BUF: usize = 512;

/// Size of the per-tuple header (KEY + TYPE + LENGTH)
pub const TUPLE_HEADER_SIZE: usize = 4 + 1 + 2;

/// Errors that can occur during dictionary decoding or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictionaryError {
    /// Message ended in the middle of a tuple
    Truncated,
    /// Unknown tuple type tag
    InvalidType(u8),
    /// Value length not valid for its type
    InvalidLength,
    /// Cstring value is not UTF-8
    InvalidUtf8,
    /// Bytes left over after the declared tuple count
    TrailingBytes,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// More than 255 tuples in one message
    TooManyTuples,
}

/// Iterator over the tuples of an encoded dictionary
///
/// Yields `Err` at most once; iteration stops after the first error.
#[derive(Debug, Clone)]
pub struct DictionaryReader<'a> {
    data: &'a [u8],
    offset: usize,
    remaining: u8,
    failed: bool,
}

impl<'a> DictionaryReader<'a> {
    /// Start reading a dictionary
    pub fn new(data: &'a [u8]) -> Result<Self, DictionaryError> {
        let (&count, _) = data.split_first().ok_or(DictionaryError::Truncated)?;
        Ok(Self {
            data,
            offset: 1,
            remaining: count,
            failed: false,
        })
    }

    /// Number of tuples not yet read
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    fn read_tuple(&mut self) -> Result<Tuple<'a>, DictionaryError> {
        let header = self
            .data
            .get(self.offset..self.offset + TUPLE_HEADER_SIZE)
            .ok_or(DictionaryError::Truncated)?;

        let key = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let tuple_type =
            TupleType::from_byte(header[4]).ok_or(DictionaryError::InvalidType(header[4]))?;
        let length = u16::from_le_bytes([header[5], header[6]]) as usize;

        let start = self.offset + TUPLE_HEADER_SIZE;
        let value = self
            .data
            .get(start..start + length)
            .ok_or(DictionaryError::Truncated)?;
        self.offset = start + length;

        let value = decode_value(tuple_type, value)?;
        Ok(Tuple { key, value })
    }
}

impl<'a> Iterator for DictionaryReader<'a> {
    type Item = Result<Tuple<'a>, DictionaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if self.remaining == 0 {
            if self.offset != self.data.len() {
                self.failed = true;
                return Some(Err(DictionaryError::TrailingBytes));
            }
            return None;
        }

        self.remaining -= 1;
        let result = self.read_tuple();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

fn decode_value(tuple_type: TupleType, value: &[u8]) -> Result<TupleValue<'_>, DictionaryError> {
    match (tuple_type, value.len()) {
        (TupleType::ByteArray, _) => Ok(TupleValue::Bytes(value)),
        (TupleType::CString, _) => {
            // Everything from the first NUL on is padding
            let end = value.iter().position(|&b| b == 0).unwrap_or(value.len());
            core::str::from_utf8(&value[..end])
                .map(TupleValue::CString)
                .map_err(|_| DictionaryError::InvalidUtf8)
        }
        (TupleType::Uint, 1) => Ok(TupleValue::Uint8(value[0])),
        (TupleType::Uint, 2) => Ok(TupleValue::Uint16(u16::from_le_bytes([value[0], value[1]]))),
        (TupleType::Uint, 4) => Ok(TupleValue::Uint32(u32::from_le_bytes([
            value[0], value[1], value[2], value[3],
        ]))),
        (TupleType::Int, 1) => Ok(TupleValue::Int8(value[0] as i8)),
        (TupleType::Int, 2) => Ok(TupleValue::Int16(i16::from_le_bytes([value[0], value[1]]))),
        (TupleType::Int, 4) => Ok(TupleValue::Int32(i32::from_le_bytes([
            value[0], value[1], value[2], value[3],
        ]))),
        (TupleType::Uint | TupleType::Int, _) => Err(DictionaryError::InvalidLength),
    }
}

/// Incremental dictionary encoder
///
/// Used by the host simulator and tests to play the companion's role.
pub struct DictionaryWriter<'b> {
    buffer: &'b mut [u8],
    len: usize,
    count: u8,
}

impl<'b> DictionaryWriter<'b> {
    /// Start a dictionary in `buffer`
    pub fn new(buffer: &'b mut [u8]) -> Result<Self, DictionaryError> {
        if buffer.is_empty() {
            return Err(DictionaryError::BufferTooSmall);
        }
        Ok(Self {
            buffer,
            len: 1,
            count: 0,
        })
    }

    /// Append one tuple
    pub fn push(&mut self, tuple: &Tuple<'_>) -> Result<(), DictionaryError> {
        if self.count == u8::MAX {
            return Err(DictionaryError::TooManyTuples);
        }

        let value_len = tuple.value.wire_len();
        if value_len > u16::MAX as usize {
            return Err(DictionaryError::InvalidLength);
        }
        let end = self.len + TUPLE_HEADER_SIZE + value_len;
        if end > self.buffer.len() {
            return Err(DictionaryError::BufferTooSmall);
        }

        let out = &mut self.buffer[self.len..end];
        out[0..4].copy_from_slice(&tuple.key.to_le_bytes());
        out[4] = tuple.value.tuple_type().to_byte();
        out[5..7].copy_from_slice(&(value_len as u16).to_le_bytes());

        let value = &mut out[TUPLE_HEADER_SIZE..];
        match tuple.value {
            TupleValue::Bytes(data) => value.copy_from_slice(data),
            TupleValue::CString(text) => {
                value[..text.len()].copy_from_slice(text.as_bytes());
                value[text.len()] = 0;
            }
            TupleValue::Uint8(v) => value[0] = v,
            TupleValue::Uint16(v) => value.copy_from_slice(&v.to_le_bytes()),
            TupleValue::Uint32(v) => value.copy_from_slice(&v.to_le_bytes()),
            TupleValue::Int8(v) => value[0] = v as u8,
            TupleValue::Int16(v) => value.copy_from_slice(&v.to_le_bytes()),
            TupleValue::Int32(v) => value.copy_from_slice(&v.to_le_bytes()),
        }

        self.len = end;
        self.count += 1;
        Ok(())
    }

    /// Write the tuple count and return the encoded length
    pub fn finish(self) -> usize {
        self.buffer[0] = self.count;
        self.len
    }
}

/// Encode a list of tuples into a heapless Vec
pub fn encode_to_vec(tuples: &[Tuple<'_>]) -> Result<Vec<u8, MESSAGE_BUF>, DictionaryError> {
    let mut buffer = [0u8; MESSAGE_BUF];
    let mut writer = DictionaryWriter::new(&mut buffer)?;
    for tuple in tuples {
        writer.push(tuple)?;
    }
    let len = writer.finish();

    let mut vec = Vec::new();
    vec.extend_from_slice(&buffer[..len])
        .map_err(|_| DictionaryError::BufferTooSmall)?;
    Ok(vec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::ChannelKey;
    use proptest::prelude::*;

    #[test]
    fn test_decode_single_uint8() {
        // count=1, key=9 (humidity), type=uint, len=1, value=42
        let data = [1, 9, 0, 0, 0, 2, 1, 0, 42];
        let mut reader = DictionaryReader::new(&data).unwrap();
        let tuple = reader.next().unwrap().unwrap();
        assert_eq!(tuple.channel_key(), Some(ChannelKey::Humidity));
        assert_eq!(tuple.value, TupleValue::Uint8(42));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_decode_negative_int8() {
        let data = [1, 4, 0, 0, 0, 3, 1, 0, 0xFB];
        let tuple = DictionaryReader::new(&data).unwrap().next().unwrap().unwrap();
        assert_eq!(tuple.value, TupleValue::Int8(-5));
    }

    #[test]
    fn test_decode_cstring_strips_nul() {
        let data = [1, 0xB, 0, 0, 0, 1, 3, 0, b'h', b'i', 0];
        let tuple = DictionaryReader::new(&data).unwrap().next().unwrap().unwrap();
        assert_eq!(tuple.value, TupleValue::CString("hi"));
    }

    #[test]
    fn test_decode_empty_message() {
        assert_eq!(
            DictionaryReader::new(&[]).unwrap_err(),
            DictionaryError::Truncated
        );
        let mut reader = DictionaryReader::new(&[0]).unwrap();
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_truncated_value() {
        // Declares a 60 byte array but only carries 3 bytes
        let data = [1, 8, 0, 0, 0, 0, 60, 0, 1, 2, 3];
        let mut reader = DictionaryReader::new(&data).unwrap();
        assert_eq!(reader.next(), Some(Err(DictionaryError::Truncated)));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_invalid_type() {
        let data = [1, 0, 0, 0, 0, 9, 1, 0, 0];
        let mut reader = DictionaryReader::new(&data).unwrap();
        assert_eq!(reader.next(), Some(Err(DictionaryError::InvalidType(9))));
    }

    #[test]
    fn test_invalid_integer_width() {
        let data = [1, 0, 0, 0, 0, 2, 3, 0, 1, 2, 3];
        let mut reader = DictionaryReader::new(&data).unwrap();
        assert_eq!(reader.next(), Some(Err(DictionaryError::InvalidLength)));
    }

    #[test]
    fn test_invalid_utf8() {
        let data = [1, 0xB, 0, 0, 0, 1, 2, 0, 0xFF, 0];
        let mut reader = DictionaryReader::new(&data).unwrap();
        assert_eq!(reader.next(), Some(Err(DictionaryError::InvalidUtf8)));
    }

    #[test]
    fn test_trailing_bytes() {
        let data = [1, 9, 0, 0, 0, 2, 1, 0, 42, 0xEE];
        let mut reader = DictionaryReader::new(&data).unwrap();
        assert!(reader.next().unwrap().is_ok());
        assert_eq!(reader.next(), Some(Err(DictionaryError::TrailingBytes)));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_encode_weather_message() {
        let precip = [0u8; 60];
        let tuples = [
            Tuple::new(ChannelKey::Icon, TupleValue::Uint8(3)),
            Tuple::new(ChannelKey::Temp, TupleValue::Int8(-2)),
            Tuple::new(ChannelKey::PrecipArray, TupleValue::Bytes(&precip)),
            Tuple::new(ChannelKey::WindSpeed, TupleValue::Uint16(35)),
            Tuple::new(ChannelKey::Report, TupleValue::CString("dry")),
        ];
        let encoded = encode_to_vec(&tuples).unwrap();
        assert_eq!(encoded[0], 5);

        let decoded: heapless::Vec<Tuple<'_>, 8> = DictionaryReader::new(&encoded)
            .unwrap()
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(decoded.as_slice(), &tuples);
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let mut buffer = [0u8; 8];
        let mut writer = DictionaryWriter::new(&mut buffer).unwrap();
        let result = writer.push(&Tuple::new(ChannelKey::Temp, TupleValue::Int32(1)));
        assert_eq!(result, Err(DictionaryError::BufferTooSmall));
    }

    proptest! {
        #[test]
        fn decoding_arbitrary_bytes_never_panics(
            data in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            if let Ok(reader) = DictionaryReader::new(&data) {
                for result in reader {
                    let _ = result;
                }
            }
        }
    }
}
