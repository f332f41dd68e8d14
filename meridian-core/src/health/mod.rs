//! On-device health metrics
//!
//! - `HealthSnapshot`: heart rate, distance and sleep totals for today
//! - `HeartRateHistory`: the last hour of per-minute samples and the
//!   gap-filling plot used by the heart-rate graph

pub mod heart_rate;
pub mod summary;

pub use heart_rate::{HeartRateHistory, MinuteSample, HISTORY_MINUTES, VISIBLE_MINUTES};
pub use summary::{HealthMetric, HealthSnapshot, SleepTotals};
