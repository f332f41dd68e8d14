//! Text regions: time, date and the message line

use core::fmt::{self, Write};

use heapless::String;
use jiff::civil::DateTime;
use meridian_display::{rect, Canvas, CanvasError, Font, Rectangle, Size, TextAlignment, TextStyle};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format into a fixed-capacity string, truncating on overflow
pub fn format<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut out = String::new();
    let _ = out.write_fmt(args);
    out
}

/// Full region box
pub fn full(size: Size) -> Rectangle {
    rect(0, 0, size.width as i32, size.height as i32)
}

/// `HH:MM`
pub fn time_text(time: &DateTime) -> String<8> {
    format(format_args!("{:02}:{:02}", time.hour(), time.minute()))
}

/// `Mon DD`
pub fn date_text(time: &DateTime) -> String<8> {
    let month = MONTHS
        .get((time.month() as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("???");
    format(format_args!("{} {:02}", month, time.day()))
}

pub fn time<C: Canvas + ?Sized>(
    time: Option<DateTime>,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let Some(time) = time else {
        return Ok(());
    };
    let style = TextStyle::new(Font::Leco32BoldNumbers).aligned(TextAlignment::Right);
    canvas.draw_text(&time_text(&time), full(size), style)
}

pub fn date<C: Canvas + ?Sized>(
    time: Option<DateTime>,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let Some(time) = time else {
        return Ok(());
    };
    let style = TextStyle::new(Font::Gothic28Bold).aligned(TextAlignment::Right);
    canvas.draw_text(&date_text(&time), full(size), style)
}

/// Fixed message line, right aligned
pub fn message<C: Canvas + ?Sized>(
    text: &str,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    if text.is_empty() {
        return Ok(());
    }
    let style = TextStyle::new(Font::Gothic14).aligned(TextAlignment::Right);
    canvas.draw_text(text, full(size), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil;
    use meridian_display::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_time_and_date_text() {
        let t = civil::date(2024, 3, 5).at(7, 4, 0, 0);
        assert_eq!(time_text(&t).as_str(), "07:04");
        assert_eq!(date_text(&t).as_str(), "Mar 05");

        let t = civil::date(2023, 12, 31).at(23, 59, 0, 0);
        assert_eq!(time_text(&t).as_str(), "23:59");
        assert_eq!(date_text(&t).as_str(), "Dec 31");
    }

    #[test]
    fn test_time_style() {
        let mut canvas = RecordingCanvas::new();
        let t = civil::date(2024, 3, 5).at(12, 0, 0, 0);
        time(Some(t), Size::new(102, 32), &mut canvas).unwrap();

        match &canvas.commands()[0] {
            DrawCommand::Text { text, bounds, style } => {
                assert_eq!(text.as_str(), "12:00");
                assert_eq!(*bounds, rect(0, 0, 102, 32));
                assert_eq!(style.font, Font::Leco32BoldNumbers);
                assert_eq!(style.alignment, TextAlignment::Right);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_time_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        time(None, Size::new(102, 32), &mut canvas).unwrap();
        date(None, Size::new(66, 30), &mut canvas).unwrap();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_date_renderer_style() {
        let mut canvas = RecordingCanvas::new();
        let t = civil::date(2024, 7, 9).at(8, 0, 0, 0);
        date(Some(t), Size::new(66, 30), &mut canvas).unwrap();

        match &canvas.commands()[0] {
            DrawCommand::Text { text, style, .. } => {
                assert_eq!(text.as_str(), "Jul 09");
                assert_eq!(style.font, Font::Gothic28Bold);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_format_truncates() {
        let s: String<4> = format(format_args!("{}", 123456));
        assert!(s.len() <= 4);
    }
}
