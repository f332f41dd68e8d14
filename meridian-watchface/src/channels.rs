//! Event queue
//!
//! Platform callbacks post events here; the application drains it from its
//! single-threaded loop. Nothing blocks: a full queue drops the event.

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;

use crate::events::SourceEvent;
use crate::fmt::warn;

/// Channel capacity for source events
pub const EVENT_QUEUE_SIZE: usize = 8;

/// Queue of source events (single-threaded, no locking)
pub type EventQueue = Channel<NoopRawMutex, SourceEvent, EVENT_QUEUE_SIZE>;

/// Queue an event, dropping it if the queue is full
///
/// Returns false if the event was dropped.
pub fn post(queue: &EventQueue, event: SourceEvent) -> bool {
    match queue.try_send(event) {
        Ok(()) => true,
        Err(_) => {
            warn!("Event queue full, dropping event");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_queue_drops() {
        let queue = EventQueue::new();
        for _ in 0..EVENT_QUEUE_SIZE {
            assert!(post(&queue, SourceEvent::Battery(50)));
        }
        assert!(!post(&queue, SourceEvent::Battery(40)));
        assert_eq!(queue.try_receive().ok(), Some(SourceEvent::Battery(50)));
    }
}
