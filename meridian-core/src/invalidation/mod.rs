//! Region invalidation
//!
//! Handlers never draw. They report which channel changed and the
//! dispatcher marks every region that reads that channel as dirty. The
//! platform drains the dirty set when it repaints.

pub mod dispatcher;
pub mod region;

pub use dispatcher::{regions_for, Dispatcher, TICK_REGIONS};
pub use region::{DirtyRegions, Drain, Region, REGION_COUNT};
