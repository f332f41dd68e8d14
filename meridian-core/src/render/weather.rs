//! Weather regions: icon, temperature block, humidity, wind and report

use meridian_display::{
    rect, BitmapHandle, Canvas, CanvasError, Compositing, Font, Rectangle, Size, TextAlignment,
    TextStyle,
};

use super::text::{format, full};
use crate::weather::WeatherSnapshot;

/// Negative numbers shift left to make room for the sign
const SIGN_SHIFT: i32 = 5;

/// Weather icon, composited over the background
pub fn icon<C: Canvas + ?Sized>(
    bitmap: Option<BitmapHandle>,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    match bitmap {
        Some(bitmap) => canvas.draw_bitmap(bitmap, rect(0, 0, 25, 25), Compositing::Set),
        None => Ok(()),
    }
}

fn temperature<C: Canvas + ?Sized>(
    value: Option<i8>,
    bounds: Rectangle,
    alignment: TextAlignment,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let Some(value) = value else {
        return Ok(());
    };
    let text: heapless::String<4> = format(format_args!("{}", value));
    canvas.draw_text(&text, bounds, TextStyle::new(Font::Gothic14).aligned(alignment))
}

fn shift(value: Option<i8>) -> i32 {
    match value {
        Some(v) if v < 0 => SIGN_SHIFT,
        _ => 0,
    }
}

/// Temperature block
///
/// Actual temperature with its max above and min below, then the apparent
/// temperature with its own max and min. Nothing is drawn while the actual
/// temperature is unknown.
pub fn temperatures<C: Canvas + ?Sized>(
    weather: &WeatherSnapshot,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let actual = weather.actual;
    let apparent = weather.apparent;
    if actual.current.is_none() {
        return Ok(());
    }

    temperature(actual.current, rect(0, 7, 18, 15), TextAlignment::Right, canvas)?;
    temperature(
        actual.max,
        rect(16 - shift(actual.max), 0, 18, 15),
        TextAlignment::Left,
        canvas,
    )?;
    temperature(
        actual.min,
        rect(16 - shift(actual.min), 14, 18, 15),
        TextAlignment::Left,
        canvas,
    )?;

    temperature(apparent.current, rect(20, 7, 18, 15), TextAlignment::Right, canvas)?;
    temperature(
        apparent.max,
        rect(38 - shift(apparent.max), 0, 18, 15),
        TextAlignment::Left,
        canvas,
    )?;
    temperature(
        apparent.min,
        rect(38 - shift(apparent.min), 14, 18, 15),
        TextAlignment::Left,
        canvas,
    )
}

/// Relative humidity as `{n}%`
pub fn humidity<C: Canvas + ?Sized>(
    percent: Option<u8>,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let Some(percent) = percent else {
        return Ok(());
    };
    let text: heapless::String<5> = format(format_args!("{}%", percent));
    canvas.draw_text(&text, full(size), TextStyle::new(Font::Gothic14))
}

/// Wind speed in whole m/s
pub fn wind<C: Canvas + ?Sized>(
    tenths: Option<u16>,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let Some(tenths) = tenths else {
        return Ok(());
    };
    let text: heapless::String<8> = format(format_args!("{}m/s", tenths / 10));
    canvas.draw_text(&text, full(size), TextStyle::new(Font::Gothic14))
}

/// Free-text report, word wrapped
pub fn report<C: Canvas + ?Sized>(
    weather: &WeatherSnapshot,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    if weather.report.is_empty() {
        return Ok(());
    }
    canvas.draw_text(&weather.report, full(size), TextStyle::new(Font::Gothic14))
}
