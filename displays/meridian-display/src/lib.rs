//! Drawing surface abstraction and shared canvases for Meridian
//!
//! This crate provides:
//! - `Canvas` trait: the drawing primitives renderers emit (line, filled and
//!   outlined rectangle, text, bitmap)
//! - `RecordingCanvas`: a fixed-capacity command list, used by tests and by
//!   platforms that replay drawing later
//! - `GraphicsCanvas`: an adapter drawing straight into any
//!   `embedded_graphics::DrawTarget`
//!
//! # Architecture
//!
//! Renderers only see a `Canvas` in region-local coordinates. They never know
//! whether the output is recorded, sent to a panel, or rasterized on the host.
//!
//! Geometry types (`Point`, `Size`, `Rectangle`) are embedded-graphics types
//! so that an adapter can hand them to the graphics stack unchanged.

#![no_std]

pub mod canvas;
pub mod graphics;
pub mod primitives;
pub mod recorder;

// Re-export key types
pub use canvas::{rect, Canvas, CanvasError};
pub use graphics::{Bitmap, BitmapSource, GraphicsCanvas, NoBitmaps};
pub use primitives::{BitmapHandle, Color, Compositing, Font, Overflow, TextAlignment, TextStyle};
pub use recorder::{DrawCommand, RecordingCanvas, MAX_COMMANDS, TEXT_CAPACITY};

pub use embedded_graphics::geometry::{Point, Size};
pub use embedded_graphics::primitives::Rectangle;
