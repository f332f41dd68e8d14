//! Per-minute precipitation probabilities
//!
//! The companion sends 60 minutes of forecast starting at the delivery
//! minute. Instead of shifting storage every minute, an age counter offsets
//! reads: slot `i` is valid only while `i + age < 60`. Once the age reaches
//! the buffer length the whole buffer is stale.

use meridian_protocol::{PRECIP_SLOTS, PROBABILITY_MAX};

/// Fixed 60-slot ring of probabilities (0-100, 0 = no data)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PrecipitationRing {
    slots: [u8; PRECIP_SLOTS],
    age: u8,
}

impl Default for PrecipitationRing {
    fn default() -> Self {
        Self::new()
    }
}

impl PrecipitationRing {
    /// All-zero buffer, as fresh data
    pub const fn new() -> Self {
        Self {
            slots: [0; PRECIP_SLOTS],
            age: 0,
        }
    }

    /// Replace the content with a fresh delivery and reset the age
    ///
    /// Missing trailing slots are zero and values beyond the buffer length
    /// are ignored. Companion deliveries are range-checked before they get
    /// here; values above 100 from other callers are clamped.
    pub fn replace(&mut self, values: &[u8]) {
        self.slots = [0; PRECIP_SLOTS];
        for (slot, &value) in self.slots.iter_mut().zip(values) {
            *slot = value.min(PROBABILITY_MAX);
        }
        self.age = 0;
    }

    /// Advance one minute, saturating at the stale age
    pub fn tick(&mut self) {
        if (self.age as usize) < PRECIP_SLOTS {
            self.age += 1;
        }
    }

    /// Minutes since the last delivery (saturates at 60)
    pub fn age(&self) -> u8 {
        self.age
    }

    /// True once no slot can be read anymore
    pub fn is_stale(&self) -> bool {
        self.age as usize >= PRECIP_SLOTS
    }

    /// Probability `offset` minutes from now, if still inside the buffer
    pub fn slot(&self, offset: usize) -> Option<u8> {
        let index = self.age as usize + offset;
        self.slots.get(index).copied()
    }

    /// Probabilities from now onward, at most `len` of them
    ///
    /// Stops at the end of the buffer; yields nothing when stale.
    pub fn window(&self, len: usize) -> impl Iterator<Item = u8> + '_ {
        let start = (self.age as usize).min(PRECIP_SLOTS);
        self.slots[start..].iter().copied().take(len)
    }

    /// Raw storage, oldest delivery minute first
    pub fn slots(&self) -> &[u8; PRECIP_SLOTS] {
        &self.slots
    }
}
