//! Recording canvas
//!
//! Captures drawing commands in a fixed-capacity list instead of rasterizing
//! them. Tests inspect the list; platforms can replay it later.

use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;
use heapless::{String, Vec};

use crate::canvas::{Canvas, CanvasError};
use crate::primitives::{BitmapHandle, Color, Compositing, TextStyle};

/// Maximum bytes of text kept per text command
pub const TEXT_CAPACITY: usize = 100;

/// Maximum commands per recording
///
/// The busiest region (precipitation graph) emits 45 bars and 4 frame
/// primitives.
pub const MAX_COMMANDS: usize = 96;

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCommand {
    Line {
        start: Point,
        end: Point,
        color: Color,
    },
    FillRect {
        rect: Rectangle,
        color: Color,
    },
    StrokeRect {
        rect: Rectangle,
        color: Color,
    },
    Text {
        text: String<TEXT_CAPACITY>,
        bounds: Rectangle,
        style: TextStyle,
    },
    Bitmap {
        bitmap: BitmapHandle,
        bounds: Rectangle,
        mode: Compositing,
    },
}

/// Canvas that records commands
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand, MAX_COMMANDS>,
}

impl RecordingCanvas {
    /// Create an empty recording
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Forget all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands in drawing order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// True if nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Recorded lines as (start, end, color)
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line { start, end, color } => Some((*start, *end, *color)),
            _ => None,
        })
    }

    /// Recorded text strings
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Recorded filled rectangles as (rect, color)
    pub fn filled_rects(&self) -> impl Iterator<Item = (Rectangle, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), CanvasError> {
        self.commands
            .push(command)
            .map_err(|_| CanvasError::BufferOverflow)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, start: Point, end: Point, color: Color) -> Result<(), CanvasError> {
        self.record(DrawCommand::Line { start, end, color })
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), CanvasError> {
        self.record(DrawCommand::FillRect { rect, color })
    }

    fn draw_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), CanvasError> {
        self.record(DrawCommand::StrokeRect { rect, color })
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rectangle,
        style: TextStyle,
    ) -> Result<(), CanvasError> {
        // Truncate on a char boundary if too long
        let mut end = text.len().min(TEXT_CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let mut stored = String::new();
        let _ = stored.push_str(&text[..end]);
        self.record(DrawCommand::Text {
            text: stored,
            bounds,
            style,
        })
    }

    fn draw_bitmap(
        &mut self,
        bitmap: BitmapHandle,
        bounds: Rectangle,
        mode: Compositing,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::Bitmap {
            bitmap,
            bounds,
            mode,
        })
    }
}
