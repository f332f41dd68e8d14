//! embedded-graphics canvas adapter
//!
//! Draws canvas primitives into any `DrawTarget` whose color can be built
//! from [`Color`]. Each canvas covers one region: coordinates are translated
//! by the region origin and clipped to its size.

use embedded_graphics::draw_target::{Clipped, DrawTarget, DrawTargetExt, Translated};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_7X14};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{BinaryColor, Gray4};
use embedded_graphics::primitives::{
    Line, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::{Drawable, Pixel};

use crate::canvas::{Canvas, CanvasError};
use crate::primitives::{BitmapHandle, Color, Compositing, Font, Overflow, TextAlignment, TextStyle};

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => BinaryColor::Off,
            Color::White | Color::DarkGray => BinaryColor::On,
        }
    }
}

impl From<Color> for Gray4 {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Gray4::new(0),
            Color::DarkGray => Gray4::new(5),
            Color::White => Gray4::new(15),
        }
    }
}

/// 1 bit per pixel image, rows packed MSB first and padded to whole bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    pub size: Size,
    pub data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    pub const fn new(size: Size, data: &'a [u8]) -> Self {
        Self { size, data }
    }

    /// Whether the pixel at (x, y) is set; out of range reads as unset
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.size.width || y >= self.size.height {
            return false;
        }
        let stride = self.size.width.div_ceil(8) as usize;
        let index = y as usize * stride + x as usize / 8;
        self.data
            .get(index)
            .map(|byte| byte & (0x80 >> (x % 8)) != 0)
            .unwrap_or(false)
    }
}

/// Resolves bitmap handles to pixel data
pub trait BitmapSource {
    fn bitmap(&self, handle: BitmapHandle) -> Option<Bitmap<'_>>;
}

/// Bitmap source with no bitmaps loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBitmaps;

impl BitmapSource for NoBitmaps {
    fn bitmap(&self, _handle: BitmapHandle) -> Option<Bitmap<'_>> {
        None
    }
}

/// Canvas drawing one region of a `DrawTarget`
pub struct GraphicsCanvas<'a, D, B = NoBitmaps> {
    target: &'a mut D,
    area: Rectangle,
    bitmaps: &'a B,
}

impl<'a, D, B> GraphicsCanvas<'a, D, B>
where
    D: DrawTarget,
    D::Color: From<Color>,
    B: BitmapSource,
{
    /// Create a canvas for `area` (in target coordinates)
    pub fn new(target: &'a mut D, area: Rectangle, bitmaps: &'a B) -> Self {
        Self {
            target,
            area,
            bitmaps,
        }
    }

    /// Region this canvas draws into
    pub fn area(&self) -> Rectangle {
        self.area
    }

    fn with_region<F>(&mut self, draw: F) -> Result<(), CanvasError>
    where
        F: FnOnce(&mut Clipped<'_, Translated<'_, D>>) -> Result<(), D::Error>,
    {
        let local = Rectangle::new(Point::zero(), self.area.size);
        let mut translated = self.target.translated(self.area.top_left);
        let mut clipped = translated.clipped(&local);
        draw(&mut clipped).map_err(|_| CanvasError::Draw)
    }
}

fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Gothic14 => &FONT_7X14,
        Font::Gothic28Bold | Font::Leco32BoldNumbers => &FONT_10X20,
    }
}

/// Greedy word wrapping over a borrowed string
struct WordWrap<'t> {
    rest: &'t str,
    max_chars: usize,
}

impl<'t> Iterator for WordWrap<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let rest = self.rest.trim_start_matches(' ');
        if rest.is_empty() {
            return None;
        }

        let limit = rest
            .char_indices()
            .nth(self.max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let candidate = &rest[..limit];

        let (line, next) = if let Some(newline) = candidate.find('\n') {
            (&rest[..newline], &rest[newline + 1..])
        } else if limit == rest.len() {
            (rest, "")
        } else if rest[limit..].starts_with([' ', '\n']) {
            // Exactly full line
            (candidate, &rest[limit + 1..])
        } else if let Some(space) = candidate.rfind(' ').filter(|&i| i > 0) {
            (&rest[..space], &rest[space + 1..])
        } else {
            (candidate, &rest[limit..])
        };

        self.rest = next;
        Some(line)
    }
}

impl<'a, D, B> Canvas for GraphicsCanvas<'a, D, B>
where
    D: DrawTarget,
    D::Color: From<Color>,
    B: BitmapSource,
{
    fn draw_line(&mut self, start: Point, end: Point, color: Color) -> Result<(), CanvasError> {
        let style = PrimitiveStyle::with_stroke(D::Color::from(color), 1);
        self.with_region(|t| Line::new(start, end).into_styled(style).draw(t))
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), CanvasError> {
        let style = PrimitiveStyle::with_fill(D::Color::from(color));
        self.with_region(|t| rect.into_styled(style).draw(t))
    }

    fn draw_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), CanvasError> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(D::Color::from(color))
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        self.with_region(|t| rect.into_styled(style).draw(t))
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rectangle,
        style: TextStyle,
    ) -> Result<(), CanvasError> {
        let font = mono_font(style.font);
        let character_style = MonoTextStyle::new(font, D::Color::from(style.color));
        let advance = font.character_size.width + font.character_spacing;
        let max_chars = (bounds.size.width / advance.max(1)).max(1) as usize;
        let line_height = font.character_size.height as i32;

        let (alignment, x) = match style.alignment {
            TextAlignment::Left => (Alignment::Left, bounds.top_left.x),
            TextAlignment::Center => (
                Alignment::Center,
                bounds.top_left.x + bounds.size.width as i32 / 2,
            ),
            TextAlignment::Right => (
                Alignment::Right,
                bounds.top_left.x + bounds.size.width as i32 - 1,
            ),
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();

        let max_lines = match style.overflow {
            Overflow::Clip => 1,
            Overflow::WordWrap => {
                (bounds.size.height as i32 / line_height.max(1)).max(1) as usize
            }
        };
        let lines = WordWrap {
            rest: text,
            max_chars: if style.overflow == Overflow::Clip {
                usize::MAX
            } else {
                max_chars
            },
        };

        self.with_region(|t| {
            for (row, line) in lines.take(max_lines).enumerate() {
                let position = Point::new(x, bounds.top_left.y + row as i32 * line_height);
                Text::with_text_style(line, position, character_style, text_style).draw(t)?;
            }
            Ok(())
        })
    }

    fn draw_bitmap(
        &mut self,
        bitmap: BitmapHandle,
        bounds: Rectangle,
        mode: Compositing,
    ) -> Result<(), CanvasError> {
        let bitmaps = self.bitmaps;
        let image = bitmaps
            .bitmap(bitmap)
            .ok_or(CanvasError::UnknownBitmap)?;

        let width = image.size.width.min(bounds.size.width);
        let height = image.size.height.min(bounds.size.height);
        let on = D::Color::from(Color::White);
        let off = D::Color::from(Color::Black);
        let origin = bounds.top_left;

        let pixels = (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .filter_map(move |(x, y)| {
                let point = origin + Point::new(x as i32, y as i32);
                match (image.is_set(x, y), mode) {
                    (true, _) => Some(Pixel(point, on)),
                    (false, Compositing::Assign) => Some(Pixel(point, off)),
                    (false, Compositing::Set) => None,
                }
            });

        self.with_region(|t| t.draw_iter(pixels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::rect;
    use embedded_graphics::mock_display::MockDisplay;

    struct OneBitmap;

    const STRIPE: [u8; 1] = [0b1000_0001];

    impl BitmapSource for OneBitmap {
        fn bitmap(&self, handle: BitmapHandle) -> Option<Bitmap<'_>> {
            (handle == BitmapHandle(7)).then(|| Bitmap::new(Size::new(8, 1), &STRIPE))
        }
    }

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_line_is_translated() {
        let mut display = display();
        let mut canvas = GraphicsCanvas::new(&mut display, rect(2, 2, 10, 10), &NoBitmaps);
        canvas
            .draw_line(Point::new(0, 0), Point::new(3, 0), Color::White)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(5, 2)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_fill_is_clipped_to_region() {
        let mut display = display();
        let mut canvas = GraphicsCanvas::new(&mut display, rect(0, 0, 4, 4), &NoBitmaps);
        canvas.fill_rect(rect(0, 0, 20, 20), Color::White).unwrap();

        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(5, 5)), None);
    }

    #[test]
    fn test_outline_stays_inside() {
        let mut display = display();
        let mut canvas = GraphicsCanvas::new(&mut display, rect(0, 0, 10, 10), &NoBitmaps);
        canvas.draw_rect(rect(1, 1, 4, 4), Color::White).unwrap();

        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(4, 4)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(2, 2)), None);
        assert_eq!(display.get_pixel(Point::new(5, 5)), None);
    }

    #[test]
    fn test_bitmap_set_mode_skips_unset_pixels() {
        let mut display = display();
        let mut canvas = GraphicsCanvas::new(&mut display, rect(0, 0, 10, 10), &OneBitmap);
        canvas
            .draw_bitmap(BitmapHandle(7), rect(0, 0, 8, 1), Compositing::Set)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(1, 0)), None);
        assert_eq!(display.get_pixel(Point::new(7, 0)), Some(BinaryColor::On));
    }

    #[test]
    fn test_bitmap_assign_mode_draws_background() {
        let mut display = display();
        let mut canvas = GraphicsCanvas::new(&mut display, rect(0, 0, 10, 10), &OneBitmap);
        canvas
            .draw_bitmap(BitmapHandle(7), rect(0, 0, 8, 1), Compositing::Assign)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(1, 0)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_unknown_bitmap() {
        let mut display = display();
        let mut canvas = GraphicsCanvas::new(&mut display, rect(0, 0, 10, 10), &NoBitmaps);
        assert_eq!(
            canvas.draw_bitmap(BitmapHandle(1), rect(0, 0, 8, 8), Compositing::Set),
            Err(CanvasError::UnknownBitmap)
        );
    }

    #[test]
    fn test_text_draws_pixels() {
        let mut display = display();
        let mut canvas = GraphicsCanvas::new(&mut display, rect(0, 0, 40, 14), &NoBitmaps);
        canvas
            .draw_text("42", rect(0, 0, 40, 14), TextStyle::new(Font::Gothic14))
            .unwrap();

        let lit = (0..40)
            .flat_map(|x| (0..14).map(move |y| Point::new(x, y)))
            .filter(|&p| display.get_pixel(p) == Some(BinaryColor::On))
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn test_word_wrap() {
        let mut lines = WordWrap {
            rest: "light rain later today",
            max_chars: 10,
        };
        assert_eq!(lines.next(), Some("light rain"));
        assert_eq!(lines.next(), Some("later"));
        assert_eq!(lines.next(), Some("today"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_word_wrap_full_line_before_break() {
        let mut lines = WordWrap {
            rest: "rain stop\nsun",
            max_chars: 9,
        };
        assert_eq!(lines.next(), Some("rain stop"));
        assert_eq!(lines.next(), Some("sun"));
        assert_eq!(lines.next(), None);

        let mut lines = WordWrap {
            rest: "abcd efgh ij",
            max_chars: 4,
        };
        assert_eq!(lines.next(), Some("abcd"));
        assert_eq!(lines.next(), Some("efgh"));
        assert_eq!(lines.next(), Some("ij"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_word_wrap_hard_break() {
        let mut lines = WordWrap {
            rest: "abcdefghij",
            max_chars: 4,
        };
        assert_eq!(lines.next(), Some("abcd"));
        assert_eq!(lines.next(), Some("efgh"));
        assert_eq!(lines.next(), Some("ij"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_bitmap_bits() {
        let data = [0b0100_0000, 0b0000_0001];
        let bitmap = Bitmap::new(Size::new(9, 1), &data);
        assert!(bitmap.is_set(1, 0));
        assert!(!bitmap.is_set(0, 0));
        assert!(!bitmap.is_set(15, 0));
        assert!(!bitmap.is_set(0, 1));
    }
}
