//! Configuration types
//!
//! Watchface settings stored as postcard binary data, and the fixed region
//! layout derived from the screen size.

pub mod layout;
pub mod types;

pub use layout::Layout;
pub use types::*;
