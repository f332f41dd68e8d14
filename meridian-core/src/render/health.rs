//! Health regions: heart-rate graph and text, distance, sleep

use meridian_display::{rect, Canvas, CanvasError, Color, Font, Point, Size, TextStyle};

use super::text::{format, full};
use crate::health::heart_rate::PLOT_BOTTOM;
use crate::health::{HeartRateHistory, SleepTotals};

/// Heart-rate graph
///
/// A dark-gray midline, one bar per visible minute from its plot height
/// down to the band bottom, an outline, and a dark-gray divider marking the
/// quarter hour.
pub fn heart_rate_graph<C: Canvas + ?Sized>(
    history: &HeartRateHistory,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    canvas.fill_rect(rect(1, 11, 33, 1), Color::DarkGray)?;

    for (i, y) in history.visible_plot().into_iter().enumerate() {
        let x = i as i32 + 2;
        canvas.draw_line(Point::new(x, y), Point::new(x, PLOT_BOTTOM), Color::White)?;
    }

    canvas.draw_rect(rect(0, 0, 34, 22), Color::White)?;
    canvas.fill_rect(rect(16, 1, 1, 20), Color::DarkGray)
}

/// `❤{bpm}`, nothing until the first reading
pub fn heart_rate<C: Canvas + ?Sized>(
    bpm: Option<u16>,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let Some(bpm) = bpm else {
        return Ok(());
    };
    let text: heapless::String<8> = format(format_args!("\u{2764}{}", bpm));
    canvas.draw_text(&text, full(size), TextStyle::new(Font::Gothic14))
}

/// Walked distance as `{km}.{hundreds of m}km`
pub fn distance<C: Canvas + ?Sized>(
    meters: u32,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let text: heapless::String<12> =
        format(format_args!("{}.{}km", meters / 1000, (meters % 1000) / 100));
    canvas.draw_text(&text, full(size), TextStyle::new(Font::Gothic14))
}

/// Sleep as `{restful%}%/{hours}.{tenths}h`
///
/// Without any sleep the percentage is unknown and shown as `--`.
pub fn sleep<C: Canvas + ?Sized>(
    sleep: &SleepTotals,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let hours = sleep.total_s / 3600;
    let tenths = (sleep.total_s % 3600) * 10 / 3600;
    let text: heapless::String<16> = match sleep.restful_percent() {
        Some(percent) => format(format_args!("{}%/{}.{}h", percent, hours, tenths)),
        None => format(format_args!("--%/{}.{}h", hours, tenths)),
    };
    canvas.draw_text(&text, full(size), TextStyle::new(Font::Gothic14))
}
