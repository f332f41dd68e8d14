//! Scripted platform
//!
//! A platform whose sources return values set by the caller. Used by the
//! host simulator and by tests to drive the watchface without a device.

use heapless::Vec;
use jiff::civil::DateTime;
use meridian_core::health::{HealthMetric, MinuteSample, HISTORY_MINUTES};
use meridian_core::traits::{
    BatteryMonitor, ClockSource, CompanionLink, ConnectionMonitor, Diagnostic, DiagnosticSink,
    EventSource, HealthService, ResourceError, ResourceLoader, SubscribeError,
};
use meridian_core::weather::ResourceId;
use meridian_display::BitmapHandle;

use crate::lifecycle::Platform;

/// Diagnostics kept by `RecordedDiagnostics`
pub const MAX_DIAGNOSTICS: usize = 32;

/// Images `ScriptedResources` can hold at once
pub const MAX_LOADED: usize = 4;

/// Subscription bookkeeping shared by every scripted source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptedSubscription {
    pub active: bool,
    /// Refuse the next subscribe with this error
    pub refuse: Option<SubscribeError>,
    pub subscribe_calls: u8,
    pub unsubscribe_calls: u8,
}

impl ScriptedSubscription {
    fn subscribe(&mut self) -> Result<(), SubscribeError> {
        self.subscribe_calls += 1;
        if let Some(e) = self.refuse {
            return Err(e);
        }
        self.active = true;
        Ok(())
    }

    fn unsubscribe(&mut self) {
        self.unsubscribe_calls += 1;
        self.active = false;
    }
}

macro_rules! scripted_source {
    ($source:ty) => {
        impl EventSource for $source {
            fn subscribe(&mut self) -> Result<(), SubscribeError> {
                self.subscription.subscribe()
            }

            fn unsubscribe(&mut self) {
                self.subscription.unsubscribe()
            }
        }
    };
}

#[derive(Debug, Clone)]
pub struct ScriptedClock {
    pub now: DateTime,
    pub subscription: ScriptedSubscription,
}

impl ClockSource for ScriptedClock {
    fn now(&self) -> DateTime {
        self.now
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedBattery {
    pub percent: u8,
    pub subscription: ScriptedSubscription,
}

impl BatteryMonitor for ScriptedBattery {
    fn charge_percent(&self) -> u8 {
        self.percent
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedConnection {
    pub connected: bool,
    pub subscription: ScriptedSubscription,
}

impl ConnectionMonitor for ScriptedConnection {
    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedHealth {
    pub heart_rate: Option<u32>,
    pub distance_m: u32,
    pub sleep_s: u32,
    pub restful_sleep_s: u32,
    /// Minute samples, oldest first
    pub history: Vec<MinuteSample, HISTORY_MINUTES>,
    pub subscription: ScriptedSubscription,
}

impl HealthService for ScriptedHealth {
    fn peek(&self, metric: HealthMetric) -> Option<u32> {
        match metric {
            HealthMetric::HeartRateBpm => self.heart_rate,
            _ => None,
        }
    }

    fn sum_today(&self, metric: HealthMetric) -> u32 {
        match metric {
            HealthMetric::HeartRateBpm => 0,
            HealthMetric::WalkedDistanceMeters => self.distance_m,
            HealthMetric::SleepSeconds => self.sleep_s,
            HealthMetric::SleepRestfulSeconds => self.restful_sleep_s,
        }
    }

    fn minute_history(&mut self, out: &mut [MinuteSample]) -> usize {
        // Newest minutes when more are held than requested
        let skip = self.history.len().saturating_sub(out.len());
        let latest = &self.history[skip..];
        out[..latest.len()].copy_from_slice(latest);
        latest.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedCompanion {
    pub subscription: ScriptedSubscription,
}

impl CompanionLink for ScriptedCompanion {}

scripted_source!(ScriptedClock);
scripted_source!(ScriptedBattery);
scripted_source!(ScriptedConnection);
scripted_source!(ScriptedHealth);
scripted_source!(ScriptedCompanion);

/// Resource loader handing out sequential handles
#[derive(Debug, Clone, Default)]
pub struct ScriptedResources {
    loaded: Vec<(BitmapHandle, ResourceId), MAX_LOADED>,
    next_handle: u16,
    /// Fail every load with this error
    pub fail: Option<ResourceError>,
    pub load_calls: u16,
    pub release_calls: u16,
}

impl ScriptedResources {
    /// Resources currently held
    pub fn loaded(&self) -> impl Iterator<Item = ResourceId> + '_ {
        self.loaded.iter().map(|(_, resource)| *resource)
    }

    /// Resource behind a live handle
    pub fn resource(&self, handle: BitmapHandle) -> Option<ResourceId> {
        self.loaded
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, resource)| *resource)
    }
}

impl ResourceLoader for ScriptedResources {
    fn load(&mut self, resource: ResourceId) -> Result<BitmapHandle, ResourceError> {
        self.load_calls += 1;
        if let Some(e) = self.fail {
            return Err(e);
        }
        let handle = BitmapHandle(self.next_handle);
        self.loaded
            .push((handle, resource))
            .map_err(|_| ResourceError::OutOfMemory)?;
        self.next_handle = self.next_handle.wrapping_add(1);
        Ok(handle)
    }

    fn release(&mut self, handle: BitmapHandle) {
        self.release_calls += 1;
        self.loaded.retain(|(h, _)| *h != handle);
    }
}

/// Diagnostic sink keeping the first reports
#[derive(Debug, Clone, Default)]
pub struct RecordedDiagnostics {
    pub reports: Vec<Diagnostic, MAX_DIAGNOSTICS>,
}

impl DiagnosticSink for RecordedDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        let _ = self.reports.push(diagnostic);
    }
}

/// Platform assembled from scripted sources
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    pub clock: ScriptedClock,
    pub battery: ScriptedBattery,
    pub connection: ScriptedConnection,
    pub health: ScriptedHealth,
    pub companion: ScriptedCompanion,
    pub resources: ScriptedResources,
    pub diagnostics: RecordedDiagnostics,
}

impl ScriptedPlatform {
    /// Connected, fully charged platform with no health data
    pub fn new(now: DateTime) -> Self {
        Self {
            clock: ScriptedClock {
                now,
                subscription: ScriptedSubscription::default(),
            },
            battery: ScriptedBattery {
                percent: 100,
                ..Default::default()
            },
            connection: ScriptedConnection {
                connected: true,
                ..Default::default()
            },
            health: ScriptedHealth::default(),
            companion: ScriptedCompanion::default(),
            resources: ScriptedResources::default(),
            diagnostics: RecordedDiagnostics::default(),
        }
    }

    /// True if any source is still subscribed
    pub fn any_subscribed(&self) -> bool {
        [
            self.clock.subscription,
            self.battery.subscription,
            self.connection.subscription,
            self.health.subscription,
            self.companion.subscription,
        ]
        .iter()
        .any(|s| s.active)
    }
}

impl Platform for ScriptedPlatform {
    type Clock = ScriptedClock;
    type Battery = ScriptedBattery;
    type Connection = ScriptedConnection;
    type Health = ScriptedHealth;
    type Companion = ScriptedCompanion;
    type Resources = ScriptedResources;
    type Diagnostics = RecordedDiagnostics;

    fn clock(&mut self) -> &mut ScriptedClock {
        &mut self.clock
    }

    fn battery(&mut self) -> &mut ScriptedBattery {
        &mut self.battery
    }

    fn connection(&mut self) -> &mut ScriptedConnection {
        &mut self.connection
    }

    fn health(&mut self) -> &mut ScriptedHealth {
        &mut self.health
    }

    fn companion(&mut self) -> &mut ScriptedCompanion {
        &mut self.companion
    }

    fn resources(&mut self) -> &mut ScriptedResources {
        &mut self.resources
    }

    fn diagnostics(&mut self) -> &mut RecordedDiagnostics {
        &mut self.diagnostics
    }
}
