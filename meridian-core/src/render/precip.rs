//! Precipitation graph and probability text

use meridian_display::{rect, Canvas, CanvasError, Color, Font, Point, TextAlignment, TextStyle};

use super::text::format;
use crate::weather::PrecipitationRing;

/// Minutes drawn by the graph
pub const GRAPH_MINUTES: usize = 45;

/// Bottom row of the bars
const BAR_BASE: i32 = 25;

/// Tallest bar in pixels
const BAR_MAX: i32 = 24;

/// Precipitation graph
///
/// One column per minute from now, up to 45 minutes or the end of the
/// buffer. Minutes without data leave their column empty. Nothing is drawn if
/// no column has data. With data older than `stale_after` minutes, a marker
/// fills the bottom rows from the end of the window to the right edge.
pub fn graph<C: Canvas + ?Sized>(
    ring: &PrecipitationRing,
    stale_after: u8,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let mut extent = 0;
    let mut bars = 0;
    for (i, probability) in ring.window(GRAPH_MINUTES).enumerate() {
        extent = i as i32 + 1;
        if probability == 0 {
            continue;
        }
        let x = i as i32 + 2;
        let height = (probability as i32 / 10).min(BAR_MAX);
        canvas.draw_line(
            Point::new(x, BAR_BASE - height),
            Point::new(x, BAR_BASE),
            Color::White,
        )?;
        bars += 1;
    }

    if bars == 0 {
        return Ok(());
    }

    canvas.draw_rect(rect(0, 0, 49, 27), Color::White)?;
    canvas.fill_rect(rect(17, 1, 1, 25), Color::DarkGray)?;
    canvas.fill_rect(rect(32, 1, 1, 25), Color::DarkGray)?;

    if ring.age() > stale_after {
        canvas.fill_rect(rect(extent + 1, 23, 46 - extent, 2), Color::DarkGray)?;
    }
    Ok(())
}

/// Probability of precipitation now: the number with `%` below it
pub fn probability<C: Canvas + ?Sized>(
    percent: u8,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    if percent == 0 {
        return Ok(());
    }
    let style = TextStyle::new(Font::Gothic14).aligned(TextAlignment::Right);
    let text: heapless::String<4> = format(format_args!("{}", percent));
    canvas.draw_text(&text, rect(0, 2, 20, 15), style)?;
    canvas.draw_text("%", rect(0, 13, 20, 15), style)
}
