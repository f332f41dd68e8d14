//! Meridian watchface application
//!
//! Wires the platform's data sources to the state store, marks regions
//! dirty as events arrive, and repaints the dirty regions.
//!
//! # Architecture
//!
//! ```text
//! Platform callbacks --> EventQueue --> Watchface::handle --> StateStore
//!                                              |
//!                                         Dispatcher (dirty regions)
//!                                              |
//!                                  Watchface::repaint --> Surface --> Canvas
//! ```
//!
//! Everything runs on one thread. The platform posts `SourceEvent`s to the
//! queue and calls `run_pending` and `repaint` from its main loop.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub(crate) mod fmt;

pub mod app;
pub mod channels;
pub mod events;
pub mod lifecycle;
pub mod scripted;
pub mod surface;
pub mod sync;

#[cfg(feature = "sim")]
pub mod sim;

pub use app::Watchface;
pub use channels::{post, EventQueue, EVENT_QUEUE_SIZE};
pub use events::{HealthEvent, SourceEvent};
pub use lifecycle::{InitError, Platform, Subscriptions, SUBSCRIBE_ORDER};
pub use surface::{DrawFn, GraphicsSurface, Surface};
