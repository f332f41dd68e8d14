//! Weather data pushed by the companion
//!
//! - `WeatherSnapshot`: the latest scalar weather fields and report text
//! - `PrecipitationRing`: per-minute precipitation probabilities that age
//!   with the clock
//! - `WeatherIcon`: icon codes and their image resources

pub mod icon;
pub mod precip;
pub mod snapshot;

pub use icon::{ResourceId, WeatherIcon};
pub use precip::PrecipitationRing;
pub use snapshot::{TemperatureField, TemperatureTriple, WeatherSnapshot, REPORT_CAPACITY};
