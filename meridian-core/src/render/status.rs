//! Battery gauge and connectivity glyph

use meridian_display::{rect, Canvas, CanvasError, Color, Point, Size};

/// Battery gauge
///
/// Outline with a terminal nub on top; the fill grows from the bottom in
/// proportion to the charge. At or below `low_percent` the bottom row of the
/// fill turns dark gray.
pub fn battery<C: Canvas + ?Sized>(
    percent: Option<u8>,
    low_percent: u8,
    size: Size,
    canvas: &mut C,
) -> Result<(), CanvasError> {
    let Some(level) = percent else {
        return Ok(());
    };
    let level = level.min(100) as i32;
    let w = size.width as i32;
    // The nub takes the top two rows
    let h = size.height as i32 - 2;

    canvas.draw_rect(rect(0, 2, w, h), Color::White)?;
    canvas.draw_rect(rect(w / 2 - 2, 0, 4, 2), Color::White)?;
    canvas.draw_rect(rect(w / 2 - 1, 1, 2, 2), Color::Black)?;

    let inner = h - 4;
    canvas.fill_rect(
        rect(2, 4 + inner * (100 - level) / 100, w - 4, inner * level / 100),
        Color::White,
    )?;
    // Rounding can leave the bottom row empty
    canvas.fill_rect(rect(2, h - 1, w - 4, 1), Color::White)?;

    if level <= low_percent as i32 {
        canvas.fill_rect(rect(2, h - 1, w - 4, 1), Color::DarkGray)?;
    }
    Ok(())
}

/// Connectivity glyph: a cross, plus a vertical stroke while connected
pub fn connection<C: Canvas + ?Sized>(connected: bool, canvas: &mut C) -> Result<(), CanvasError> {
    if connected {
        canvas.draw_line(Point::new(3, 0), Point::new(3, 12), Color::White)?;
        canvas.draw_line(Point::new(3, 0), Point::new(6, 3), Color::White)?;
        canvas.draw_line(Point::new(3, 12), Point::new(6, 9), Color::White)?;
    }
    canvas.draw_line(Point::new(0, 3), Point::new(6, 9), Color::White)?;
    canvas.draw_line(Point::new(0, 9), Point::new(6, 3), Color::White)
}
