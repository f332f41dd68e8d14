//! Paint surfaces
//!
//! A surface hands out a canvas for one region at a time. The canvas uses
//! region-local coordinates and clips to the region bounds.

use embedded_graphics::draw_target::DrawTarget;
use meridian_core::invalidation::Region;
use meridian_display::{rect, BitmapSource, Canvas, CanvasError, Color, GraphicsCanvas, Rectangle};

/// Region drawing callback
pub type DrawFn<'f> = dyn FnMut(&mut dyn Canvas) -> Result<(), CanvasError> + 'f;

/// Something regions can be painted on
pub trait Surface {
    /// Run `draw` against a canvas covering `bounds` (screen coordinates)
    fn paint(
        &mut self,
        region: Region,
        bounds: Rectangle,
        draw: &mut DrawFn<'_>,
    ) -> Result<(), CanvasError>;
}

/// Surface over an embedded-graphics draw target
///
/// Each region is cleared to black before it is drawn.
pub struct GraphicsSurface<'a, D, B> {
    target: &'a mut D,
    bitmaps: &'a B,
}

impl<'a, D, B> GraphicsSurface<'a, D, B>
where
    D: DrawTarget,
    D::Color: From<Color>,
    B: BitmapSource,
{
    pub fn new(target: &'a mut D, bitmaps: &'a B) -> Self {
        Self { target, bitmaps }
    }
}

impl<'a, D, B> Surface for GraphicsSurface<'a, D, B>
where
    D: DrawTarget,
    D::Color: From<Color>,
    B: BitmapSource,
{
    fn paint(
        &mut self,
        _region: Region,
        bounds: Rectangle,
        draw: &mut DrawFn<'_>,
    ) -> Result<(), CanvasError> {
        let mut canvas = GraphicsCanvas::new(&mut *self.target, bounds, self.bitmaps);
        let size = bounds.size;
        canvas.fill_rect(rect(0, 0, size.width as i32, size.height as i32), Color::Black)?;
        draw(&mut canvas)
    }
}
