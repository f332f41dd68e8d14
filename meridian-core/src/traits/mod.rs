//! Collaborator traits
//!
//! These traits define the interface between the watchface logic and the
//! platform services it depends on.

pub mod diagnostics;
pub mod resources;
pub mod sources;

pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use resources::{ResourceError, ResourceLoader};
pub use sources::{
    BatteryMonitor, ClockSource, CompanionLink, ConnectionMonitor, EventSource, HealthService,
    SourceKind, SubscribeError,
};
