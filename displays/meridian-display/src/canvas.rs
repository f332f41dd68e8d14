//! Canvas trait
//!
//! Defines the drawing surface renderers write to.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::primitives::{BitmapHandle, Color, Compositing, TextStyle};

/// Canvas errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// The underlying draw target reported an error
    Draw,
    /// Command buffer is full
    BufferOverflow,
    /// Bitmap handle does not resolve to loaded pixel data
    UnknownBitmap,
}

/// Drawing surface
///
/// All coordinates are relative to the top-left corner of the region being
/// drawn. Implementations clip to the region bounds.
pub trait Canvas {
    /// Draw a one pixel wide line, both end points inclusive
    fn draw_line(&mut self, start: Point, end: Point, color: Color) -> Result<(), CanvasError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), CanvasError>;

    /// Draw a one pixel rectangle outline
    fn draw_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), CanvasError>;

    /// Draw text inside a box
    ///
    /// - `text`: UTF-8 text; glyphs the font lacks are substituted
    /// - `bounds`: box the text is laid out in
    /// - `style`: font, alignment, overflow and color
    fn draw_text(&mut self, text: &str, bounds: Rectangle, style: TextStyle)
        -> Result<(), CanvasError>;

    /// Compose a previously loaded bitmap into `bounds`
    fn draw_bitmap(
        &mut self,
        bitmap: BitmapHandle,
        bounds: Rectangle,
        mode: Compositing,
    ) -> Result<(), CanvasError>;
}

/// Build a rectangle from x, y, width and height
///
/// Negative sizes collapse to an empty rectangle.
pub fn rect(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
    Rectangle::new(
        Point::new(x, y),
        Size::new(width.max(0) as u32, height.max(0) as u32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_helper() {
        let r = rect(2, 4, 6, 13);
        assert_eq!(r.top_left, Point::new(2, 4));
        assert_eq!(r.size, Size::new(6, 13));
    }

    #[test]
    fn test_rect_negative_size_is_empty() {
        let r = rect(0, 0, -3, 5);
        assert_eq!(r.size, Size::new(0, 5));
    }
}
