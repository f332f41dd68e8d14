//! Health totals for today

/// Health quantities the health service can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HealthMetric {
    HeartRateBpm,
    WalkedDistanceMeters,
    SleepSeconds,
    SleepRestfulSeconds,
}

/// Sleep totals in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SleepTotals {
    pub total_s: u32,
    pub restful_s: u32,
}

impl SleepTotals {
    /// Restful share of total sleep in percent, `None` without any sleep
    pub fn restful_percent(&self) -> Option<u32> {
        if self.total_s == 0 {
            return None;
        }
        Some((self.restful_s as u64 * 100 / self.total_s as u64) as u32)
    }
}

/// Health values shown on the watchface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HealthSnapshot {
    /// Latest heart rate, `None` until the first reading
    pub heart_rate: Option<u16>,
    /// Distance walked today in meters
    pub distance_m: u32,
    pub sleep: SleepTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restful_percent() {
        let sleep = SleepTotals {
            total_s: 8 * 3600,
            restful_s: 2 * 3600,
        };
        assert_eq!(sleep.restful_percent(), Some(25));
    }

    #[test]
    fn test_restful_percent_without_sleep() {
        assert_eq!(SleepTotals::default().restful_percent(), None);
    }
}
