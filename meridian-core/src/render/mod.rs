//! Region renderers
//!
//! Pure functions from the current state and a region size to drawing
//! commands. Renderers only read state; they run when the platform repaints
//! a dirty region. Coordinates are relative to the region's top-left corner.

pub mod health;
pub mod precip;
pub mod status;
pub mod text;
pub mod weather;

use meridian_display::{BitmapHandle, Canvas, CanvasError, Size};

use crate::config::WatchfaceConfig;
use crate::invalidation::Region;
use crate::state::StateStore;

/// Everything a renderer may read
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub store: &'a StateStore,
    pub config: &'a WatchfaceConfig,
    /// Loaded image for the current weather icon
    pub icon: Option<BitmapHandle>,
}

/// Draw one region
pub fn render_region<C: Canvas + ?Sized>(
    region: Region,
    size: Size,
    ctx: &RenderContext<'_>,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let store = ctx.store;
    match region {
        Region::Time => text::time(store.time(), size, canvas),
        Region::Date => text::date(store.time(), size, canvas),
        Region::Report => weather::report(store.weather(), size, canvas),
        Region::Battery => status::battery(
            store.battery_percent(),
            ctx.config.low_battery_percent,
            size,
            canvas,
        ),
        Region::Connection => status::connection(store.is_connected(), canvas),
        Region::WeatherIcon => weather::icon(ctx.icon, canvas),
        Region::Temperature => weather::temperatures(store.weather(), canvas),
        Region::PrecipProbability => {
            precip::probability(store.weather().precip_probability, canvas)
        }
        Region::PrecipGraph => {
            precip::graph(store.precip(), ctx.config.stale_after_minutes, canvas)
        }
        Region::Humidity => weather::humidity(store.weather().humidity, size, canvas),
        Region::Wind => weather::wind(store.weather().wind_tenths, size, canvas),
        Region::HeartRateGraph => health::heart_rate_graph(store.heart_rate_history(), canvas),
        Region::HeartRateText => health::heart_rate(store.health().heart_rate, size, canvas),
        Region::Distance => health::distance(store.health().distance_m, size, canvas),
        Region::Sleep => health::sleep(&store.health().sleep, size, canvas),
        Region::Message => text::message(&ctx.config.message, size, canvas),
    }
}
