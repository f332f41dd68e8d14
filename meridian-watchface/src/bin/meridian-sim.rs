//! Meridian host simulator
//!
//! Starts the watchface on a scripted platform, plays a short scenario and
//! prints the screen after each step.
//!
//! Usage: `meridian-sim [config.toml]`

use std::path::PathBuf;

use jiff::civil::date;
use log::{error, info, warn};

use meridian_core::health::MinuteSample;
use meridian_core::traits::{Diagnostic, DiagnosticSink};
use meridian_protocol::dictionary::encode_to_vec;
use meridian_protocol::{ChannelKey, Tuple, TupleValue};
use meridian_watchface::scripted::ScriptedPlatform;
use meridian_watchface::sim::{load_config, DiscIcons, Framebuffer};
use meridian_watchface::{post, EventQueue, GraphicsSurface, HealthEvent, SourceEvent, Watchface};

fn weather_message() -> Option<SourceEvent> {
    let mut precip = [0u8; 60];
    for (minute, slot) in precip.iter_mut().enumerate().take(25) {
        *slot = 90u8.saturating_sub(minute as u8 * 3);
    }

    let tuples = [
        Tuple::new(ChannelKey::Icon, TupleValue::Uint8(3)),
        Tuple::new(ChannelKey::ApparentTemp, TupleValue::Int8(-2)),
        Tuple::new(ChannelKey::ApparentTempMax, TupleValue::Int8(4)),
        Tuple::new(ChannelKey::ApparentTempMin, TupleValue::Int8(-6)),
        Tuple::new(ChannelKey::Temp, TupleValue::Int8(3)),
        Tuple::new(ChannelKey::TempMax, TupleValue::Int8(7)),
        Tuple::new(ChannelKey::TempMin, TupleValue::Int8(-1)),
        Tuple::new(ChannelKey::PrecipProbability, TupleValue::Uint8(80)),
        Tuple::new(ChannelKey::PrecipArray, TupleValue::Bytes(&precip)),
        Tuple::new(ChannelKey::Humidity, TupleValue::Uint8(87)),
        Tuple::new(ChannelKey::WindSpeed, TupleValue::Uint16(54)),
        Tuple::new(
            ChannelKey::Report,
            TupleValue::CString("Light rain starting in 5 min, stopping 20 min later."),
        ),
    ];
    let bytes = encode_to_vec(&tuples).ok()?;
    SourceEvent::message(&bytes)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => load_config(&path).unwrap_or_else(|e| {
            warn!("Using default configuration: {:?}", e);
            Default::default()
        }),
        None => Default::default(),
    };

    let start = date(2024, 11, 4).at(7, 42, 0, 0);
    let mut platform = ScriptedPlatform::new(start);
    platform.battery.percent = 64;
    platform.health.heart_rate = Some(68);
    platform.health.distance_m = 2350;
    platform.health.sleep_s = 7 * 3600 + 20 * 60;
    platform.health.restful_sleep_s = 2 * 3600;
    for minute in 0..60u8 {
        let _ = platform.health.history.push(MinuteSample::new(60 + minute % 20));
    }

    let screen = config.screen;
    let mut watchface = match Watchface::init(&mut platform, config) {
        Ok(watchface) => watchface,
        Err(e) => {
            error!("Startup failed: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut framebuffer = Framebuffer::new(screen.width as u32, screen.height as u32);
    let icons = DiscIcons;
    let queue = EventQueue::new();

    let mut now = start;
    let mut steps: Vec<(&str, Vec<SourceEvent>)> = vec![("startup", Vec::new())];
    if let Some(message) = weather_message() {
        steps.push(("weather update", vec![message]));
    }
    steps.push((
        "heart rate and battery",
        vec![
            SourceEvent::Health(HealthEvent::HeartRate),
            SourceEvent::Battery(4),
        ],
    ));
    let mut ticks = Vec::new();
    for _ in 0..20 {
        now = now.saturating_add(jiff::Span::new().minutes(1));
        ticks.push(SourceEvent::Tick(now));
    }
    steps.push(("twenty minutes later", ticks));
    steps.push(("companion lost", vec![SourceEvent::Connection(false)]));

    for (name, events) in steps {
        for event in events {
            if !post(&queue, event) {
                platform.diagnostics.report(Diagnostic::QueueFull);
            }
            watchface.run_pending(&mut platform, &queue);
        }

        let mut surface = GraphicsSurface::new(&mut framebuffer, &icons);
        let painted = watchface.repaint(&mut platform, &mut surface);
        info!("{}: repainted {} regions", name, painted);
        println!("{}", framebuffer.to_ascii());
    }

    for diagnostic in &platform.diagnostics.reports {
        warn!("Diagnostic: {:?}", diagnostic);
    }
    watchface.deinit(&mut platform);
}
