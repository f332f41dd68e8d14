//! Watchface application
//!
//! Owns the state store, the dispatcher and the retained resources. Event
//! handlers update the store and mark regions dirty; `repaint` draws only
//! the dirty regions.

use meridian_core::config::{Layout, WatchfaceConfig};
use meridian_core::health::{HealthMetric, MinuteSample, SleepTotals, HISTORY_MINUTES};
use meridian_core::invalidation::{DirtyRegions, Dispatcher, Region};
use meridian_core::render::{render_region, RenderContext};
use meridian_core::state::{Channel, StateStore};
use meridian_core::traits::{
    BatteryMonitor, ClockSource, ConnectionMonitor, Diagnostic, DiagnosticSink, HealthService,
    ResourceLoader,
};
use meridian_core::weather::WeatherIcon;
use meridian_display::{BitmapHandle, Canvas};
use meridian_protocol::DictionaryReader;

use crate::channels::EventQueue;
use crate::events::{HealthEvent, SourceEvent};
use crate::fmt::{debug, info, warn};
use crate::lifecycle::{InitError, Platform, Subscriptions};
use crate::surface::Surface;
use crate::sync::initial_values;

/// Icon image currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoadedIcon {
    icon: WeatherIcon,
    handle: BitmapHandle,
}

/// Forward a diagnostic to the log and the platform sink
fn report<P: Platform>(platform: &mut P, diagnostic: Diagnostic) {
    warn!("{:?}", diagnostic);
    platform.diagnostics().report(diagnostic);
}

/// The running watchface
#[derive(Debug)]
pub struct Watchface {
    config: WatchfaceConfig,
    layout: Layout,
    store: StateStore,
    dispatcher: Dispatcher,
    subscriptions: Subscriptions,
    icon: Option<LoadedIcon>,
}

impl Watchface {
    /// Start the watchface
    ///
    /// Validates the configuration, subscribes to every source and reads
    /// their current values. Every region is dirty afterwards.
    pub fn init<P: Platform>(platform: &mut P, config: WatchfaceConfig) -> Result<Self, InitError> {
        config.validate()?;
        let subscriptions = Subscriptions::acquire(platform)?;

        let mut watchface = Self {
            layout: Layout::for_screen(config.screen),
            config,
            store: StateStore::new(),
            dispatcher: Dispatcher::new(),
            subscriptions,
            icon: None,
        };
        watchface.initial_sync(platform);
        watchface.dispatcher.mark_all();

        info!("Watchface started");
        Ok(watchface)
    }

    fn initial_sync<P: Platform>(&mut self, platform: &mut P) {
        let now = platform.clock().now();
        let channel = self.store.set_time(now);
        self.dispatcher.notify(channel);

        self.on_battery(platform.battery().charge_percent());
        self.on_health(platform, HealthEvent::Significant);
        self.on_connection(platform.connection().is_connected());

        for tuple in initial_values() {
            match self.store.apply_tuple(&tuple) {
                Ok(channel) => self.dispatcher.notify(channel),
                Err(e) => report(platform, e.into()),
            }
        }
    }

    /// Stop the watchface, releasing the icon and every subscription
    pub fn deinit<P: Platform>(mut self, platform: &mut P) {
        if let Some(loaded) = self.icon.take() {
            platform.resources().release(loaded.handle);
        }
        self.subscriptions.release(platform);
        info!("Watchface stopped");
    }

    /// Handle one source event
    pub fn handle<P: Platform>(&mut self, platform: &mut P, event: SourceEvent) {
        match event {
            SourceEvent::Tick(now) => {
                debug!("Tick {}:{}", now.hour(), now.minute());
                let channel = self.store.tick(now);
                self.dispatcher.notify(channel);
                self.dispatcher.on_tick();
            }
            SourceEvent::Battery(percent) => self.on_battery(percent),
            SourceEvent::Connection(connected) => self.on_connection(connected),
            SourceEvent::Health(event) => self.on_health(platform, event),
            SourceEvent::Message(data) => self.on_message(platform, &data),
            SourceEvent::SyncError => report(platform, Diagnostic::SyncFailed),
        }
    }

    /// Handle every queued event, returns how many were handled
    pub fn run_pending<P: Platform>(&mut self, platform: &mut P, queue: &EventQueue) -> usize {
        let mut handled = 0;
        while let Ok(event) = queue.try_receive() {
            self.handle(platform, event);
            handled += 1;
        }
        handled
    }

    fn notify(&mut self, channel: Channel) {
        self.dispatcher.notify(channel);
    }

    fn on_battery(&mut self, percent: u8) {
        let channel = self.store.set_battery(percent);
        self.notify(channel);
    }

    fn on_connection(&mut self, connected: bool) {
        let channel = self.store.set_connected(connected);
        self.notify(channel);
    }

    fn on_health<P: Platform>(&mut self, platform: &mut P, event: HealthEvent) {
        let health = platform.health();
        let mut channels: heapless::Vec<Channel, 3> = heapless::Vec::new();

        if matches!(event, HealthEvent::HeartRate | HealthEvent::Significant) {
            let bpm = health
                .peek(HealthMetric::HeartRateBpm)
                .map(|bpm| u16::try_from(bpm).unwrap_or(u16::MAX));
            let _ = channels.push(self.store.set_heart_rate(bpm));
        }
        if matches!(event, HealthEvent::Movement | HealthEvent::Significant) {
            let meters = health.sum_today(HealthMetric::WalkedDistanceMeters);
            let _ = channels.push(self.store.set_distance(meters));
        }
        if matches!(event, HealthEvent::Sleep | HealthEvent::Significant) {
            let sleep = SleepTotals {
                total_s: health.sum_today(HealthMetric::SleepSeconds),
                restful_s: health.sum_today(HealthMetric::SleepRestfulSeconds),
            };
            let _ = channels.push(self.store.set_sleep(sleep));
        }

        for channel in channels {
            self.notify(channel);
        }
    }

    /// Apply a companion dictionary
    ///
    /// Invalid tuples are skipped; a decoding error stops at the broken
    /// tuple, keeping the ones before it.
    fn on_message<P: Platform>(&mut self, platform: &mut P, data: &[u8]) {
        let reader = match DictionaryReader::new(data) {
            Ok(reader) => reader,
            Err(e) => return report(platform, e.into()),
        };

        for tuple in reader {
            match tuple {
                Ok(tuple) => match self.store.apply_tuple(&tuple) {
                    Ok(channel) => self.notify(channel),
                    Err(e) => report(platform, e.into()),
                },
                Err(e) => {
                    report(platform, e.into());
                    break;
                }
            }
        }
    }

    /// Regions waiting for a repaint
    pub fn dirty(&self) -> DirtyRegions {
        self.dispatcher.dirty()
    }

    /// Draw every dirty region, returns how many were drawn
    pub fn repaint<P: Platform, S: Surface>(&mut self, platform: &mut P, surface: &mut S) -> usize {
        let mut painted = 0;
        for region in self.dispatcher.drain() {
            match region {
                Region::HeartRateGraph => self.refresh_heart_rate_history(platform),
                Region::WeatherIcon => self.sync_icon(platform),
                _ => {}
            }

            let ctx = RenderContext {
                store: &self.store,
                config: &self.config,
                icon: self.icon.map(|loaded| loaded.handle),
            };
            let bounds = self.layout.bounds(region);
            let result = surface.paint(region, bounds, &mut |canvas: &mut dyn Canvas| {
                render_region(region, bounds.size, &ctx, canvas)
            });

            match result {
                Ok(()) => painted += 1,
                Err(e) => report(platform, e.into()),
            }
        }
        painted
    }

    fn refresh_heart_rate_history<P: Platform>(&mut self, platform: &mut P) {
        let mut minutes = [MinuteSample::INVALID; HISTORY_MINUTES];
        let read = platform
            .health()
            .minute_history(&mut minutes)
            .min(HISTORY_MINUTES);
        self.store.refresh_heart_rate_history(&minutes[..read]);
    }

    /// Keep the loaded image in step with the current icon
    fn sync_icon<P: Platform>(&mut self, platform: &mut P) {
        let wanted = self.store.weather().icon;
        if self.icon.map(|loaded| loaded.icon) == Some(wanted) {
            return;
        }

        if let Some(loaded) = self.icon.take() {
            platform.resources().release(loaded.handle);
        }
        let Some(resource) = wanted.resource() else {
            return;
        };
        match platform.resources().load(resource) {
            Ok(handle) => {
                self.icon = Some(LoadedIcon {
                    icon: wanted,
                    handle,
                });
            }
            Err(e) => report(platform, e.into()),
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn config(&self) -> &WatchfaceConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Handle of the loaded weather icon image
    pub fn icon_handle(&self) -> Option<BitmapHandle> {
        self.icon.map(|loaded| loaded.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::post;
    use crate::scripted::ScriptedPlatform;
    use jiff::civil::date;
    use meridian_core::traits::{ResourceError, SourceKind, SubscribeError};
    use meridian_core::weather::ResourceId;
    use meridian_display::{CanvasError, Rectangle, RecordingCanvas};
    use meridian_protocol::dictionary::encode_to_vec;
    use meridian_protocol::{ChannelKey, Tuple, TupleValue};

    /// Surface keeping one recording per painted region
    #[derive(Default)]
    struct Recorder {
        painted: std::vec::Vec<(Region, RecordingCanvas)>,
    }

    impl Recorder {
        fn regions(&self) -> std::vec::Vec<Region> {
            self.painted.iter().map(|(region, _)| *region).collect()
        }

        fn texts(&self, region: Region) -> std::vec::Vec<std::string::String> {
            self.painted
                .iter()
                .filter(|(r, _)| *r == region)
                .flat_map(|(_, canvas)| canvas.texts().map(std::string::String::from))
                .collect()
        }
    }

    impl Surface for Recorder {
        fn paint(
            &mut self,
            region: Region,
            _bounds: Rectangle,
            draw: &mut crate::surface::DrawFn<'_>,
        ) -> Result<(), CanvasError> {
            let mut canvas = RecordingCanvas::new();
            let result = draw(&mut canvas);
            self.painted.push((region, canvas));
            result
        }
    }

    fn platform() -> ScriptedPlatform {
        ScriptedPlatform::new(date(2024, 3, 1).at(9, 5, 0, 0))
    }

    fn started(platform: &mut ScriptedPlatform) -> Watchface {
        let mut watchface = Watchface::init(platform, WatchfaceConfig::default()).unwrap();
        watchface.repaint(platform, &mut Recorder::default());
        watchface
    }

    fn message(tuples: &[Tuple<'_>]) -> SourceEvent {
        let bytes = encode_to_vec(tuples).unwrap();
        SourceEvent::message(&bytes).unwrap()
    }

    #[test]
    fn test_init_paints_every_region() {
        let mut platform = platform();
        let mut watchface = Watchface::init(&mut platform, WatchfaceConfig::default()).unwrap();
        assert_eq!(watchface.dirty().len(), Region::ALL.len());

        let mut surface = Recorder::default();
        assert_eq!(watchface.repaint(&mut platform, &mut surface), Region::ALL.len());
        assert_eq!(surface.regions(), Region::ALL.to_vec());
        assert_eq!(surface.texts(Region::Time), ["09:05"]);
        assert_eq!(surface.texts(Region::Date), ["Mar 01"]);
        assert!(watchface.dirty().is_empty());
        assert!(platform.diagnostics.reports.is_empty());
    }

    #[test]
    fn test_init_reads_initial_values() {
        let mut platform = platform();
        platform.battery.percent = 40;
        platform.connection.connected = false;
        platform.health.heart_rate = Some(72);
        platform.health.distance_m = 1500;

        let watchface = Watchface::init(&mut platform, WatchfaceConfig::default()).unwrap();
        let store = watchface.store();
        assert_eq!(store.battery_percent(), Some(40));
        assert!(!store.is_connected());
        assert_eq!(store.health().heart_rate, Some(72));
        assert_eq!(store.health().distance_m, 1500);
        assert_eq!(store.weather().icon, WeatherIcon::None);
        assert_eq!(store.weather().actual.current, None);
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let mut platform = platform();
        let config = WatchfaceConfig {
            low_battery_percent: 101,
            ..Default::default()
        };
        assert!(matches!(
            Watchface::init(&mut platform, config),
            Err(InitError::Config(_))
        ));
        assert!(!platform.any_subscribed());
    }

    #[test]
    fn test_init_subscribe_failure() {
        let mut platform = platform();
        platform.companion.subscription.refuse = Some(SubscribeError::OutOfMemory);
        assert_eq!(
            Watchface::init(&mut platform, WatchfaceConfig::default()).err(),
            Some(InitError::Subscribe(
                SourceKind::Companion,
                SubscribeError::OutOfMemory
            ))
        );
        assert!(!platform.any_subscribed());
    }

    #[test]
    fn test_battery_event_dirties_battery_only() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);

        watchface.handle(&mut platform, SourceEvent::Battery(3));
        let dirty: std::vec::Vec<Region> = watchface.dirty().iter().collect();
        assert_eq!(dirty, [Region::Battery]);
    }

    #[test]
    fn test_tick_dirties_time_and_graphs() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);

        let now = date(2024, 3, 1).at(9, 6, 0, 0);
        watchface.handle(&mut platform, SourceEvent::Tick(now));
        let dirty = watchface.dirty();
        assert!(dirty.is_dirty(Region::Time));
        assert!(dirty.is_dirty(Region::Date));
        assert!(dirty.is_dirty(Region::PrecipGraph));
        assert!(dirty.is_dirty(Region::HeartRateGraph));
        assert!(!dirty.is_dirty(Region::Battery));
        assert_eq!(watchface.store().precip().age(), 1);
    }

    #[test]
    fn test_health_event_queries_service() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);

        platform.health.sleep_s = 7 * 3600;
        platform.health.restful_sleep_s = 3600;
        watchface.handle(&mut platform, SourceEvent::Health(HealthEvent::Sleep));
        assert_eq!(watchface.store().health().sleep.total_s, 7 * 3600);
        let dirty: std::vec::Vec<Region> = watchface.dirty().iter().collect();
        assert_eq!(dirty, [Region::Sleep]);
    }

    #[test]
    fn test_message_applies_tuples() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);

        let event = message(&[
            Tuple::new(ChannelKey::Temp, TupleValue::Int8(-4)),
            Tuple::new(ChannelKey::Humidity, TupleValue::Uint8(81)),
        ]);
        watchface.handle(&mut platform, event);

        assert_eq!(watchface.store().weather().actual.current, Some(-4));
        assert_eq!(watchface.store().weather().humidity, Some(81));
        let dirty = watchface.dirty();
        assert!(dirty.is_dirty(Region::Temperature));
        assert!(dirty.is_dirty(Region::Humidity));
        assert_eq!(dirty.len(), 2);
    }

    #[test]
    fn test_malformed_tuple_reported_and_skipped() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);

        let event = message(&[
            Tuple::new(ChannelKey::Humidity, TupleValue::CString("wet")),
            Tuple::new(ChannelKey::WindSpeed, TupleValue::Uint16(42)),
        ]);
        watchface.handle(&mut platform, event);

        assert_eq!(watchface.store().weather().humidity, None);
        assert_eq!(watchface.store().weather().wind_tenths, Some(42));
        assert_eq!(platform.diagnostics.reports.len(), 1);
        assert!(matches!(
            platform.diagnostics.reports[0],
            Diagnostic::MalformedUpdate(_)
        ));
    }

    #[test]
    fn test_undecodable_message_reported() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);

        let event = SourceEvent::message(&[3, 7]).unwrap();
        watchface.handle(&mut platform, event);
        assert!(matches!(
            platform.diagnostics.reports.as_slice(),
            [Diagnostic::MalformedMessage(_)]
        ));
        assert!(watchface.dirty().is_empty());
    }

    #[test]
    fn test_sync_error_reported() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);
        watchface.handle(&mut platform, SourceEvent::SyncError);
        assert_eq!(platform.diagnostics.reports.as_slice(), [Diagnostic::SyncFailed]);
    }

    #[test]
    fn test_icon_loaded_once_and_swapped() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);
        assert_eq!(watchface.icon_handle(), None);
        assert_eq!(platform.resources.load_calls, 0);

        watchface.handle(
            &mut platform,
            message(&[Tuple::new(ChannelKey::Icon, TupleValue::Uint8(1))]),
        );
        watchface.repaint(&mut platform, &mut Recorder::default());
        let sun = watchface.icon_handle().unwrap();
        assert_eq!(platform.resources.resource(sun), Some(ResourceId::Sun25));

        // Same icon again keeps the handle
        watchface.handle(
            &mut platform,
            message(&[Tuple::new(ChannelKey::Icon, TupleValue::Uint8(1))]),
        );
        watchface.repaint(&mut platform, &mut Recorder::default());
        assert_eq!(watchface.icon_handle(), Some(sun));
        assert_eq!(platform.resources.load_calls, 1);

        watchface.handle(
            &mut platform,
            message(&[Tuple::new(ChannelKey::Icon, TupleValue::Uint8(3))]),
        );
        watchface.repaint(&mut platform, &mut Recorder::default());
        assert_eq!(platform.resources.resource(sun), None);
        assert_eq!(
            platform.resources.loaded().collect::<std::vec::Vec<_>>(),
            [ResourceId::Rain25]
        );

        watchface.deinit(&mut platform);
        assert_eq!(platform.resources.loaded().count(), 0);
        assert!(!platform.any_subscribed());
    }

    #[test]
    fn test_icon_load_failure_reported() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);
        platform.resources.fail = Some(ResourceError::OutOfMemory);

        watchface.handle(
            &mut platform,
            message(&[Tuple::new(ChannelKey::Icon, TupleValue::Uint8(2))]),
        );
        let mut surface = Recorder::default();
        watchface.repaint(&mut platform, &mut surface);

        assert_eq!(watchface.icon_handle(), None);
        assert_eq!(
            platform.diagnostics.reports.as_slice(),
            [Diagnostic::Resource(ResourceError::OutOfMemory)]
        );
        // Region is still painted, just without an image
        assert_eq!(surface.regions(), [Region::WeatherIcon]);
        assert!(surface.painted[0].1.is_empty());
    }

    #[test]
    fn test_heart_rate_graph_reads_history() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);
        for _ in 0..HISTORY_MINUTES {
            platform.health.history.push(MinuteSample::new(100)).unwrap();
        }

        watchface.handle(
            &mut platform,
            SourceEvent::Health(HealthEvent::HeartRate),
        );
        let mut surface = Recorder::default();
        watchface.repaint(&mut platform, &mut surface);

        let samples = watchface.store().heart_rate_history().samples();
        assert!(samples.iter().all(|s| s.bpm == 100));
        assert!(surface.regions().contains(&Region::HeartRateGraph));
    }

    #[test]
    fn test_run_pending_drains_queue() {
        let mut platform = platform();
        let mut watchface = started(&mut platform);
        let queue = EventQueue::new();

        post(&queue, SourceEvent::Battery(50));
        post(&queue, SourceEvent::Connection(false));
        assert_eq!(watchface.run_pending(&mut platform, &queue), 2);
        assert_eq!(watchface.store().battery_percent(), Some(50));
        assert!(!watchface.store().is_connected());
        assert_eq!(watchface.run_pending(&mut platform, &queue), 0);
    }
}
