//! Platform-agnostic core logic for the watchface
//!
//! This crate contains everything that does not depend on a specific
//! platform:
//!
//! - Channel state store and update validation
//! - Invalidation dispatcher (channel to dirty regions)
//! - Aging subsystems (heart-rate history, precipitation ring)
//! - Pure region renderers
//! - Collaborator traits (sources, resources, diagnostics)
//! - Configuration and layout types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod health;
pub mod invalidation;
pub mod render;
pub mod state;
pub mod traits;
pub mod weather;
