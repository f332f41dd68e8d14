//! Startup and teardown
//!
//! The five sources are subscribed in a fixed order. If one refuses, the
//! ones already subscribed are released again in reverse order and startup
//! fails.

use heapless::Vec;
use meridian_core::config::ConfigError;
use meridian_core::traits::{
    BatteryMonitor, ClockSource, CompanionLink, ConnectionMonitor, DiagnosticSink, EventSource,
    HealthService, ResourceLoader, SourceKind, SubscribeError,
};

use crate::fmt::{debug, error};

/// Subscription order at startup
pub const SUBSCRIBE_ORDER: [SourceKind; 5] = [
    SourceKind::Clock,
    SourceKind::Battery,
    SourceKind::Health,
    SourceKind::Connection,
    SourceKind::Companion,
];

/// Fatal startup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Configuration failed validation
    Config(ConfigError),
    /// A source refused the subscription
    Subscribe(SourceKind, SubscribeError),
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

/// Platform services the watchface depends on
pub trait Platform {
    type Clock: ClockSource;
    type Battery: BatteryMonitor;
    type Connection: ConnectionMonitor;
    type Health: HealthService;
    type Companion: CompanionLink;
    type Resources: ResourceLoader;
    type Diagnostics: DiagnosticSink;

    fn clock(&mut self) -> &mut Self::Clock;
    fn battery(&mut self) -> &mut Self::Battery;
    fn connection(&mut self) -> &mut Self::Connection;
    fn health(&mut self) -> &mut Self::Health;
    fn companion(&mut self) -> &mut Self::Companion;
    fn resources(&mut self) -> &mut Self::Resources;
    fn diagnostics(&mut self) -> &mut Self::Diagnostics;
}

fn subscribe<P: Platform>(platform: &mut P, kind: SourceKind) -> Result<(), SubscribeError> {
    match kind {
        SourceKind::Clock => platform.clock().subscribe(),
        SourceKind::Battery => platform.battery().subscribe(),
        SourceKind::Connection => platform.connection().subscribe(),
        SourceKind::Health => platform.health().subscribe(),
        SourceKind::Companion => platform.companion().subscribe(),
    }
}

fn unsubscribe<P: Platform>(platform: &mut P, kind: SourceKind) {
    match kind {
        SourceKind::Clock => platform.clock().unsubscribe(),
        SourceKind::Battery => platform.battery().unsubscribe(),
        SourceKind::Connection => platform.connection().unsubscribe(),
        SourceKind::Health => platform.health().unsubscribe(),
        SourceKind::Companion => platform.companion().unsubscribe(),
    }
}

/// Sources currently subscribed
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: Vec<SourceKind, 5>,
}

impl Subscriptions {
    /// Subscribe to every source, all or nothing
    pub fn acquire<P: Platform>(platform: &mut P) -> Result<Self, InitError> {
        let mut subscriptions = Self::default();
        for kind in SUBSCRIBE_ORDER {
            if let Err(e) = subscribe(platform, kind) {
                error!("Subscribing to {:?} failed: {:?}", kind, e);
                subscriptions.release(platform);
                return Err(InitError::Subscribe(kind, e));
            }
            debug!("Subscribed to {:?}", kind);
            // Capacity matches SUBSCRIBE_ORDER
            let _ = subscriptions.active.push(kind);
        }
        Ok(subscriptions)
    }

    /// Unsubscribe everything, newest first
    pub fn release<P: Platform>(&mut self, platform: &mut P) {
        while let Some(kind) = self.active.pop() {
            unsubscribe(platform, kind);
        }
    }

    pub fn is_subscribed(&self, kind: SourceKind) -> bool {
        self.active.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripted::ScriptedPlatform;
    use jiff::civil::date;

    fn platform() -> ScriptedPlatform {
        ScriptedPlatform::new(date(2024, 3, 1).at(9, 0, 0, 0))
    }

    #[test]
    fn test_acquire_subscribes_everything() {
        let mut platform = platform();
        let subscriptions = Subscriptions::acquire(&mut platform).unwrap();
        for kind in SUBSCRIBE_ORDER {
            assert!(subscriptions.is_subscribed(kind));
        }
        assert!(platform.companion.subscription.active);
    }

    #[test]
    fn test_failure_rolls_back() {
        let mut platform = platform();
        platform.connection.subscription.refuse = Some(SubscribeError::Unavailable);

        let result = Subscriptions::acquire(&mut platform);
        assert_eq!(
            result.err(),
            Some(InitError::Subscribe(
                SourceKind::Connection,
                SubscribeError::Unavailable
            ))
        );
        assert!(!platform.any_subscribed());
        // Sources after the failing one are never touched
        assert_eq!(platform.companion.subscription.subscribe_calls, 0);
        assert_eq!(platform.health.subscription.unsubscribe_calls, 1);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut platform = platform();
        let mut subscriptions = Subscriptions::acquire(&mut platform).unwrap();
        subscriptions.release(&mut platform);
        subscriptions.release(&mut platform);
        assert!(subscriptions.is_empty());
        assert_eq!(platform.clock.subscription.unsubscribe_calls, 1);
    }
}
