//! Source events
//!
//! Everything the platform delivers to the watchface. Events are queued and
//! handled one at a time.

use heapless::Vec;
use jiff::civil::DateTime;
use meridian_protocol::MESSAGE_BUF;

/// Health service notifications
///
/// These carry no values; the handler queries the health service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HealthEvent {
    HeartRate,
    Movement,
    Sleep,
    /// Everything may have changed
    Significant,
}

/// One event from one of the five sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// Minute tick with the new local time
    Tick(DateTime),
    /// Battery charge in percent
    Battery(u8),
    /// Companion connected or disconnected
    Connection(bool),
    Health(HealthEvent),
    /// Encoded dictionary from the companion
    Message(Vec<u8, MESSAGE_BUF>),
    /// The companion link failed to deliver a message
    SyncError,
}

impl SourceEvent {
    /// Wrap a received dictionary, `None` if it exceeds the message size
    pub fn message(data: &[u8]) -> Option<Self> {
        Vec::from_slice(data).ok().map(SourceEvent::Message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_size_limit() {
        assert!(SourceEvent::message(&[0u8; MESSAGE_BUF]).is_some());
        assert!(SourceEvent::message(&[0u8; MESSAGE_BUF + 1]).is_none());
    }
}
