//! Invalidation dispatcher
//!
//! Static mapping from channels to the regions that read them.

use super::region::{DirtyRegions, Drain, Region};
use crate::state::Channel;

/// Regions redrawn on every clock tick regardless of data arrival
pub const TICK_REGIONS: [Region; 2] = [Region::HeartRateGraph, Region::PrecipGraph];

/// Regions that depend on a channel
pub fn regions_for(channel: Channel) -> &'static [Region] {
    match channel {
        Channel::Clock => &[Region::Time, Region::Date],
        Channel::Battery => &[Region::Battery],
        Channel::Connection => &[Region::Connection],
        Channel::HeartRate => &[Region::HeartRateText, Region::HeartRateGraph],
        Channel::Movement => &[Region::Distance],
        Channel::Sleep => &[Region::Sleep],
        Channel::WeatherIcon => &[Region::WeatherIcon],
        Channel::ApparentTemp
        | Channel::ApparentTempMax
        | Channel::ApparentTempMin
        | Channel::Temp
        | Channel::TempMax
        | Channel::TempMin => &[Region::Temperature],
        Channel::PrecipProbability => &[Region::PrecipProbability],
        Channel::PrecipArray => &[Region::PrecipGraph],
        Channel::Humidity => &[Region::Humidity],
        Channel::WindSpeed => &[Region::Wind],
        Channel::Report => &[Region::Report],
    }
}

/// Accumulates dirty regions between repaints
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    dirty: DirtyRegions,
}

impl Dispatcher {
    pub const fn new() -> Self {
        Self {
            dirty: DirtyRegions::new(),
        }
    }

    /// Mark the regions that depend on `channel`
    pub fn notify(&mut self, channel: Channel) {
        for &region in regions_for(channel) {
            self.dirty.mark(region);
        }
    }

    /// Mark the aging graphs, called once per clock tick
    pub fn on_tick(&mut self) {
        for region in TICK_REGIONS {
            self.dirty.mark(region);
        }
    }

    /// Mark everything, used for the first paint
    pub fn mark_all(&mut self) {
        self.dirty.mark_all();
    }

    /// Current dirty set
    pub fn dirty(&self) -> DirtyRegions {
        self.dirty
    }

    /// Take the dirty set for a repaint
    pub fn drain(&mut self) -> Drain {
        self.dirty.take().into_iter()
    }
}
