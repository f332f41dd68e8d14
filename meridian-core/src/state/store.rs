//! State store

use jiff::civil::DateTime;
use meridian_protocol::Tuple;

use super::channel::Channel;
use super::update::{UpdateError, WeatherUpdate};
use crate::health::{HealthSnapshot, HeartRateHistory, MinuteSample, SleepTotals};
use crate::weather::{PrecipitationRing, WeatherSnapshot};

/// Snapshot of every channel
///
/// Created with every value unknown. Only event handlers mutate it;
/// renderers get a shared reference.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    time: Option<DateTime>,
    battery_percent: Option<u8>,
    connected: bool,
    health: HealthSnapshot,
    heart_rate_history: HeartRateHistory,
    weather: WeatherSnapshot,
    precip: PrecipitationRing,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the minute tick and age the precipitation ring
    pub fn tick(&mut self, now: DateTime) -> Channel {
        self.time = Some(now);
        self.precip.tick();
        Channel::Clock
    }

    /// Set the time without aging, used for the initial sync
    pub fn set_time(&mut self, now: DateTime) -> Channel {
        self.time = Some(now);
        Channel::Clock
    }

    /// Set the battery charge, clamped to 100%
    pub fn set_battery(&mut self, percent: u8) -> Channel {
        self.battery_percent = Some(percent.min(100));
        Channel::Battery
    }

    pub fn set_connected(&mut self, connected: bool) -> Channel {
        self.connected = connected;
        Channel::Connection
    }

    pub fn set_heart_rate(&mut self, bpm: Option<u16>) -> Channel {
        self.health.heart_rate = bpm.filter(|&b| b > 0);
        Channel::HeartRate
    }

    pub fn set_distance(&mut self, meters: u32) -> Channel {
        self.health.distance_m = meters;
        Channel::Movement
    }

    pub fn set_sleep(&mut self, sleep: SleepTotals) -> Channel {
        self.health.sleep = sleep;
        Channel::Sleep
    }

    /// Replace the heart-rate history, oldest minute first
    pub fn refresh_heart_rate_history(&mut self, latest: &[MinuteSample]) {
        self.heart_rate_history.replace(latest);
    }

    /// Apply a validated weather update
    pub fn apply(&mut self, update: WeatherUpdate<'_>) -> Channel {
        match update {
            WeatherUpdate::Icon(icon) => self.weather.icon = icon,
            WeatherUpdate::Temperature(field, value) => self.weather.set_temperature(field, value),
            WeatherUpdate::PrecipProbability(percent) => self.weather.precip_probability = percent,
            WeatherUpdate::PrecipArray(values) => self.precip.replace(values),
            WeatherUpdate::Humidity(percent) => self.weather.humidity = percent,
            WeatherUpdate::Wind(tenths) => self.weather.wind_tenths = tenths,
            WeatherUpdate::Report(text) => {
                self.weather.set_report(text);
            }
        }
        update.channel()
    }

    /// Validate and apply one decoded tuple
    ///
    /// On error the store is left unchanged.
    pub fn apply_tuple(&mut self, tuple: &Tuple<'_>) -> Result<Channel, UpdateError> {
        let update = WeatherUpdate::from_tuple(tuple)?;
        Ok(self.apply(update))
    }

    pub fn time(&self) -> Option<DateTime> {
        self.time
    }

    pub fn battery_percent(&self) -> Option<u8> {
        self.battery_percent
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn health(&self) -> &HealthSnapshot {
        &self.health
    }

    pub fn heart_rate_history(&self) -> &HeartRateHistory {
        &self.heart_rate_history
    }

    pub fn weather(&self) -> &WeatherSnapshot {
        &self.weather
    }

    pub fn precip(&self) -> &PrecipitationRing {
        &self.precip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{WeatherIcon, REPORT_CAPACITY};
    use jiff::civil::date;
    use meridian_protocol::{ChannelKey, TupleValue};

    #[test]
    fn test_starts_unknown() {
        let store = StateStore::new();
        assert_eq!(store.time(), None);
        assert_eq!(store.battery_percent(), None);
        assert_eq!(store.health().heart_rate, None);
        assert_eq!(store.weather().actual.current, None);
        assert_eq!(store.precip().age(), 0);
    }

    #[test]
    fn test_tick_ages_precipitation() {
        let mut store = StateStore::new();
        let now = date(2024, 3, 5).at(7, 30, 0, 0);
        assert_eq!(store.tick(now), Channel::Clock);
        assert_eq!(store.time(), Some(now));
        assert_eq!(store.precip().age(), 1);

        store.set_time(now);
        assert_eq!(store.precip().age(), 1);
    }

    #[test]
    fn test_precip_array_resets_age() {
        let mut store = StateStore::new();
        let now = date(2024, 3, 5).at(7, 30, 0, 0);
        store.tick(now);
        store.tick(now);

        let values = [40u8; 60];
        let channel = store
            .apply_tuple(&Tuple::new(ChannelKey::PrecipArray, TupleValue::Bytes(&values)))
            .unwrap();
        assert_eq!(channel, Channel::PrecipArray);
        assert_eq!(store.precip().age(), 0);
        assert_eq!(store.precip().slot(0), Some(40));
    }

    #[test]
    fn test_invalid_tuple_keeps_previous_value() {
        let mut store = StateStore::new();
        store
            .apply_tuple(&Tuple::new(ChannelKey::Icon, TupleValue::Uint8(2)))
            .unwrap();
        assert!(store
            .apply_tuple(&Tuple::new(ChannelKey::Icon, TupleValue::Uint8(42)))
            .is_err());
        assert_eq!(store.weather().icon, WeatherIcon::ClearNight);
    }

    #[test]
    fn test_oversized_report_is_truncated() {
        let mut store = StateStore::new();
        let long = [b'r'; 180];
        let text = core::str::from_utf8(&long).unwrap();
        let channel = store
            .apply_tuple(&Tuple::new(ChannelKey::Report, TupleValue::CString(text)))
            .unwrap();

        assert_eq!(channel, Channel::Report);
        assert_eq!(store.weather().report.len(), REPORT_CAPACITY);
    }

    #[test]
    fn test_battery_clamped() {
        let mut store = StateStore::new();
        store.set_battery(150);
        assert_eq!(store.battery_percent(), Some(100));
    }

    #[test]
    fn test_zero_heart_rate_is_unknown() {
        let mut store = StateStore::new();
        store.set_heart_rate(Some(72));
        store.set_heart_rate(Some(0));
        assert_eq!(store.health().heart_rate, None);
    }
}
