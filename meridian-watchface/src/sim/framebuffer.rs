//! In-memory 4-bit grayscale framebuffer

use core::convert::Infallible;

use embedded_graphics::pixelcolor::{Gray4, GrayColor};
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

/// Screen-sized grayscale pixel buffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Gray4>,
}

impl Framebuffer {
    /// Black framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Gray4::BLACK; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Gray4> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels.get((y * self.size.width + x) as usize).copied()
    }

    /// Render as text, one character per pixel
    ///
    /// Black is a space, gray `+` and white `#`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.size.width + 1) * self.size.height) as usize);
        for row in self.pixels.chunks(self.size.width as usize) {
            for pixel in row {
                out.push(match pixel.luma() {
                    0 => ' ',
                    15 => '#',
                    _ => '+',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Framebuffer {
    type Color = Gray4;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.size.width && y < self.size.height {
                self.pixels[(y * self.size.width + x) as usize] = color;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::{Point, Primitive};
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
    use embedded_graphics::Drawable;

    #[test]
    fn test_draw_and_ascii() {
        let mut fb = Framebuffer::new(4, 2);
        Rectangle::new(Point::new(1, 0), Size::new(2, 1))
            .into_styled(PrimitiveStyle::with_fill(Gray4::WHITE))
            .draw(&mut fb)
            .unwrap();
        Pixel(Point::new(0, 1), Gray4::new(5)).draw(&mut fb).unwrap();

        assert_eq!(fb.pixel(1, 0), Some(Gray4::WHITE));
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.to_ascii(), " ## \n+   \n");
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = Framebuffer::new(2, 2);
        Pixel(Point::new(-1, 5), Gray4::WHITE).draw(&mut fb).unwrap();
        assert!(fb.to_ascii().chars().all(|c| c == ' ' || c == '\n'));
    }
}
