//! Latest scalar weather fields

use heapless::String;

use super::icon::WeatherIcon;

/// Capacity of the report text in bytes
pub const REPORT_CAPACITY: usize = 100;

/// One of the six temperature fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureField {
    Apparent,
    ApparentMax,
    ApparentMin,
    Actual,
    ActualMax,
    ActualMin,
}

/// Current, maximum and minimum temperature in °C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureTriple {
    pub current: Option<i8>,
    pub max: Option<i8>,
    pub min: Option<i8>,
}

/// Weather fields as last delivered
///
/// `None` means unknown: never delivered, or delivered as the wire sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherSnapshot {
    pub icon: WeatherIcon,
    /// Feels-like temperatures
    pub apparent: TemperatureTriple,
    /// Measured temperatures
    pub actual: TemperatureTriple,
    /// Probability of precipitation now, 0-100
    pub precip_probability: u8,
    /// Relative humidity in percent
    pub humidity: Option<u8>,
    /// Wind speed in tenths of m/s
    pub wind_tenths: Option<u16>,
    pub report: String<REPORT_CAPACITY>,
}

impl WeatherSnapshot {
    pub fn temperature(&self, field: TemperatureField) -> Option<i8> {
        match field {
            TemperatureField::Apparent => self.apparent.current,
            TemperatureField::ApparentMax => self.apparent.max,
            TemperatureField::ApparentMin => self.apparent.min,
            TemperatureField::Actual => self.actual.current,
            TemperatureField::ActualMax => self.actual.max,
            TemperatureField::ActualMin => self.actual.min,
        }
    }

    pub fn set_temperature(&mut self, field: TemperatureField, value: Option<i8>) {
        let slot = match field {
            TemperatureField::Apparent => &mut self.apparent.current,
            TemperatureField::ApparentMax => &mut self.apparent.max,
            TemperatureField::ApparentMin => &mut self.apparent.min,
            TemperatureField::Actual => &mut self.actual.current,
            TemperatureField::ActualMax => &mut self.actual.max,
            TemperatureField::ActualMin => &mut self.actual.min,
        };
        *slot = value;
    }

    /// Replace the report, truncating at a char boundary if too long
    ///
    /// Returns true if the text was truncated.
    pub fn set_report(&mut self, text: &str) -> bool {
        let mut end = text.len().min(REPORT_CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        self.report.clear();
        let _ = self.report.push_str(&text[..end]);
        end < text.len()
    }
}
