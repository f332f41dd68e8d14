//! Fixed region layout
//!
//! Positions are constants relative to the screen edges, computed once at
//! startup from the configured screen size.

use meridian_display::{rect, Rectangle};

use super::types::ScreenSize;
use crate::invalidation::{Region, REGION_COUNT};

/// Screen rectangle of every region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    bounds: [Rectangle; REGION_COUNT],
}

impl Layout {
    /// Compute the layout for a screen
    pub fn for_screen(screen: ScreenSize) -> Self {
        let w = screen.width as i32;
        let h = screen.height as i32;

        let mut bounds = [Rectangle::zero(); REGION_COUNT];
        for region in Region::ALL {
            bounds[region.index()] = match region {
                Region::Time => rect(w - 104, h - 115, 102, 32),
                Region::Date => rect(w - 70, h - 83, 66, 30),
                Region::Report => rect(1, 17, w - 2, 42),
                Region::Battery => rect(1, 1, 10, 17),
                Region::Connection => rect(15, 3, 7, 13),
                Region::WeatherIcon => rect(1, h - 27, 25, 25),
                Region::Temperature => rect(27, h - 30, 54, 30),
                Region::PrecipProbability => rect(71, h - 30, 20, 30),
                Region::PrecipGraph => rect(w - 51, h - 27, 49, 27),
                Region::Humidity => rect(1, h - 42, 30, 14),
                Region::Wind => rect(31, h - 42, 40, 14),
                Region::HeartRateGraph => rect(1, h - 105, 34, 22),
                Region::HeartRateText => rect(1, h - 83, 28, 14),
                Region::Distance => rect(33, h - 83, 38, 14),
                Region::Sleep => rect(1, h - 69, 70, 14),
                Region::Message => rect(37, 0, w - 37, 14),
            };
        }
        Self { bounds }
    }

    /// Screen rectangle of a region
    pub fn bounds(&self, region: Region) -> Rectangle {
        self.bounds[region.index()]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_screen(ScreenSize::default())
    }
}
