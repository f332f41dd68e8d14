//! Drawable regions and the dirty set

/// Number of drawable regions
pub const REGION_COUNT: usize = 16;

/// Drawable regions of the watchface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    Time,
    Date,
    Report,
    Battery,
    Connection,
    WeatherIcon,
    Temperature,
    PrecipProbability,
    PrecipGraph,
    Humidity,
    Wind,
    HeartRateGraph,
    HeartRateText,
    Distance,
    Sleep,
    Message,
}

impl Region {
    /// Every region, in creation order
    pub const ALL: [Region; REGION_COUNT] = [
        Region::Time,
        Region::Date,
        Region::Report,
        Region::Battery,
        Region::Connection,
        Region::WeatherIcon,
        Region::Temperature,
        Region::PrecipProbability,
        Region::PrecipGraph,
        Region::Humidity,
        Region::Wind,
        Region::HeartRateGraph,
        Region::HeartRateText,
        Region::Distance,
        Region::Sleep,
        Region::Message,
    ];

    /// Position in [`Region::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    fn bit(self) -> u16 {
        1 << self.index()
    }
}

/// Set of regions waiting for a repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyRegions(u16);

impl DirtyRegions {
    /// Empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Mark a region dirty (idempotent)
    pub fn mark(&mut self, region: Region) {
        self.0 |= region.bit();
    }

    /// Mark every region dirty
    pub fn mark_all(&mut self) {
        for region in Region::ALL {
            self.mark(region);
        }
    }

    pub fn is_dirty(&self, region: Region) -> bool {
        self.0 & region.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over dirty regions without clearing them
    pub fn iter(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL.into_iter().filter(|r| self.is_dirty(*r))
    }

    /// Remove and return the current set, leaving this one empty
    pub fn take(&mut self) -> DirtyRegions {
        core::mem::take(self)
    }
}

impl IntoIterator for DirtyRegions {
    type Item = Region;
    type IntoIter = Drain;

    fn into_iter(self) -> Drain {
        Drain {
            set: self,
            next: 0,
        }
    }
}

/// Iterator over a taken dirty set, in [`Region::ALL`] order
#[derive(Debug, Clone)]
pub struct Drain {
    set: DirtyRegions,
    next: usize,
}

impl Iterator for Drain {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        while let Some(&region) = Region::ALL.get(self.next) {
            self.next += 1;
            if self.set.is_dirty(region) {
                return Some(region);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, region) in Region::ALL.iter().enumerate() {
            assert_eq!(region.index(), i);
        }
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut dirty = DirtyRegions::new();
        dirty.mark(Region::Battery);
        dirty.mark(Region::Battery);
        assert_eq!(dirty.len(), 1);
        assert!(dirty.is_dirty(Region::Battery));
        assert!(!dirty.is_dirty(Region::Time));
    }

    #[test]
    fn test_take_empties() {
        let mut dirty = DirtyRegions::new();
        dirty.mark(Region::Sleep);
        dirty.mark(Region::Time);

        let taken = dirty.take();
        assert!(dirty.is_empty());

        let mut regions = taken.into_iter();
        assert_eq!(regions.next(), Some(Region::Time));
        assert_eq!(regions.next(), Some(Region::Sleep));
        assert_eq!(regions.next(), None);
    }

    #[test]
    fn test_mark_all() {
        let mut dirty = DirtyRegions::new();
        dirty.mark_all();
        assert_eq!(dirty.len(), Region::ALL.len());
        assert_eq!(dirty.iter().count(), Region::ALL.len());
    }
}
