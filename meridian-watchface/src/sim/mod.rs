//! Host simulator
//!
//! Runs the watchface against the scripted platform and rasterizes the
//! screen into an in-memory framebuffer printed as text.

pub mod config;
pub mod framebuffer;
pub mod icons;

pub use config::{load_config, SimConfigError};
pub use framebuffer::Framebuffer;
pub use icons::DiscIcons;
