//! Companion Link Protocol
//!
//! This crate defines the typed key-value messages the paired phone pushes to
//! the watchface: the stable channel key space, the tuple value types, and
//! the dictionary wire format used to carry them.
//!
//! # Protocol Overview
//!
//! Every message is a dictionary of tuples:
//! ```text
//! ┌───────┬─────────────────────────────────────────────┐
//! │ COUNT │ TUPLE × COUNT                               │
//! │ 1B    │ KEY u32 LE │ TYPE 1B │ LEN u16 LE │ VALUE   │
//! └───────┴─────────────────────────────────────────────┘
//! ```
//!
//! Numeric weather fields reserve an in-range sentinel for "unknown". The
//! sentinels only exist on the wire; consumers convert them to `Option`
//! as soon as a tuple is decoded.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dictionary;
pub mod keys;
pub mod tuple;

pub use dictionary::{DictionaryError, DictionaryReader, DictionaryWriter, MESSAGE_BUF};
pub use keys::ChannelKey;
pub use tuple::{Tuple, TupleType, TupleValue};

/// Number of per-minute precipitation slots carried by the precip-array key
pub const PRECIP_SLOTS: usize = 60;

/// Wire sentinel for an unknown temperature (all six temperature keys)
pub const TEMPERATURE_UNKNOWN: i8 = 101;

/// Humidity values at or above this are unknown
pub const HUMIDITY_UNKNOWN: u8 = 101;

/// Wind speeds (tenths of m/s) at or above this are unknown
pub const WIND_UNKNOWN_TENTHS: u16 = 1000;

/// Highest valid precipitation probability, also the per-slot maximum
pub const PROBABILITY_MAX: u8 = 100;
