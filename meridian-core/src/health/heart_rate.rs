//! Heart-rate history and plot
//!
//! The graph plots 30 minutes of heart rate as vertical bars in a 20 pixel
//! band. History covers 60 minutes so that a gap at the start of the visible
//! window can be filled from the older half.

/// Minutes of history kept
pub const HISTORY_MINUTES: usize = 60;

/// Minutes drawn (the most recent ones)
pub const VISIBLE_MINUTES: usize = 30;

/// Top of the plot band (highest heart rate)
pub const PLOT_TOP: i32 = 1;

/// Bottom of the plot band (lowest heart rate)
pub const PLOT_BOTTOM: i32 = 20;

/// Plot height used before any valid sample is seen
pub const PLOT_MIDPOINT: i32 = 10;

/// Heart rate plotted at the band bottom
const BPM_BASE: i32 = 50;

/// Heart rate span covered by the band
const BPM_SPAN: i32 = 100;

/// One minute of heart-rate data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MinuteSample {
    /// Average beats per minute, 0 if not measured
    pub bpm: u8,
    /// Set when the health service flags the minute as unreliable
    pub is_invalid: bool,
}

impl MinuteSample {
    pub const fn new(bpm: u8) -> Self {
        Self {
            bpm,
            is_invalid: false,
        }
    }

    /// Sample with no data
    pub const INVALID: MinuteSample = MinuteSample {
        bpm: 0,
        is_invalid: true,
    };

    /// True if the sample can be plotted
    pub fn is_usable(&self) -> bool {
        !self.is_invalid && self.bpm != 0
    }
}

/// Plot y coordinate for a heart rate, clamped to the band
pub fn plot_y(bpm: u8) -> i32 {
    (PLOT_BOTTOM - (bpm as i32 - BPM_BASE) * PLOT_BOTTOM / BPM_SPAN).clamp(PLOT_TOP, PLOT_BOTTOM)
}

/// Last hour of heart-rate samples, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeartRateHistory {
    samples: [MinuteSample; HISTORY_MINUTES],
}

impl Default for HeartRateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HeartRateHistory {
    /// History with every minute invalid
    pub const fn new() -> Self {
        Self {
            samples: [MinuteSample::INVALID; HISTORY_MINUTES],
        }
    }

    /// Replace the history wholesale
    ///
    /// `latest` is oldest first and ends at the current minute. Shorter input
    /// leaves the oldest minutes invalid; longer input keeps the newest 60.
    pub fn replace(&mut self, latest: &[MinuteSample]) {
        let latest = &latest[latest.len().saturating_sub(HISTORY_MINUTES)..];
        let start = HISTORY_MINUTES - latest.len();
        self.samples = [MinuteSample::INVALID; HISTORY_MINUTES];
        self.samples[start..].copy_from_slice(latest);
    }

    pub fn samples(&self) -> &[MinuteSample; HISTORY_MINUTES] {
        &self.samples
    }

    /// Plot y for every minute, oldest first
    ///
    /// Unusable samples repeat the previous y, or the band midpoint if no
    /// usable sample came before.
    pub fn plot(&self) -> [i32; HISTORY_MINUTES] {
        let mut ys = [PLOT_MIDPOINT; HISTORY_MINUTES];
        let mut carry = PLOT_MIDPOINT;
        for (y, sample) in ys.iter_mut().zip(self.samples.iter()) {
            if sample.is_usable() {
                carry = plot_y(sample.bpm);
            }
            *y = carry;
        }
        ys
    }

    /// Plot y for the drawn minutes, oldest first
    pub fn visible_plot(&self) -> [i32; VISIBLE_MINUTES] {
        let mut visible = [PLOT_MIDPOINT; VISIBLE_MINUTES];
        visible.copy_from_slice(&self.plot()[HISTORY_MINUTES - VISIBLE_MINUTES..]);
        visible
    }
}
