//! Data source traits
//!
//! Each source delivers events through the platform event queue once
//! subscribed. The query methods read the current value synchronously and
//! are used for the initial sync and right before rendering.

use jiff::civil::DateTime;

use crate::health::{HealthMetric, MinuteSample};

/// The five data sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceKind {
    Clock,
    Battery,
    Connection,
    Health,
    Companion,
}

/// Errors when subscribing to a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubscribeError {
    /// Service not present on this device
    Unavailable,
    /// Service refused the subscription (limit reached, permission)
    Rejected,
    /// Link buffers could not be allocated
    OutOfMemory,
}

/// Subscription to an event-delivering service
pub trait EventSource {
    /// Start delivering events
    fn subscribe(&mut self) -> Result<(), SubscribeError>;

    /// Stop delivering events
    ///
    /// Must be safe to call for a source that is not subscribed.
    fn unsubscribe(&mut self);
}

/// Minute tick source
pub trait ClockSource: EventSource {
    /// Current local time
    fn now(&self) -> DateTime;
}

/// Battery state service
pub trait BatteryMonitor: EventSource {
    /// Current charge in percent (0-100)
    fn charge_percent(&self) -> u8;
}

/// Companion connectivity service
pub trait ConnectionMonitor: EventSource {
    /// True while the companion is connected
    fn is_connected(&self) -> bool;
}

/// On-device health service
pub trait HealthService: EventSource {
    /// Current value of a momentary metric (heart rate), if measured
    fn peek(&self, metric: HealthMetric) -> Option<u32>;

    /// Sum of a metric since midnight
    fn sum_today(&self, metric: HealthMetric) -> u32;

    /// Read the last `out.len()` minutes of heart-rate data, oldest first
    ///
    /// Returns the number of minutes written, which may be fewer than
    /// requested.
    fn minute_history(&mut self, out: &mut [MinuteSample]) -> usize;
}

/// Companion key-value link
pub trait CompanionLink: EventSource {}
