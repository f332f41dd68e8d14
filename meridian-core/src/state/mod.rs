//! Channel state
//!
//! The store holds the one authoritative snapshot of every channel. Each
//! mutation returns the channel it wrote so the caller can notify the
//! invalidation dispatcher.

pub mod channel;
pub mod store;
pub mod update;

pub use channel::Channel;
pub use store::StateStore;
pub use update::{UpdateError, WeatherUpdate};
