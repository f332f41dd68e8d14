//! Diagnostic reporting
//!
//! Malformed deliveries and other recoverable faults are reported here and
//! never shown on the watchface.

use meridian_display::CanvasError;
use meridian_protocol::DictionaryError;

use crate::state::UpdateError;
use crate::traits::ResourceError;

/// Recoverable fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// A tuple failed validation and was discarded
    MalformedUpdate(UpdateError),
    /// A message could not be decoded
    MalformedMessage(DictionaryError),
    /// The companion link reported a delivery failure
    SyncFailed,
    /// An event was dropped because the queue was full
    QueueFull,
    /// A region failed to draw
    Render(CanvasError),
    /// An icon image could not be loaded
    Resource(ResourceError),
}

impl From<UpdateError> for Diagnostic {
    fn from(e: UpdateError) -> Self {
        Diagnostic::MalformedUpdate(e)
    }
}

impl From<DictionaryError> for Diagnostic {
    fn from(e: DictionaryError) -> Self {
        Diagnostic::MalformedMessage(e)
    }
}

impl From<CanvasError> for Diagnostic {
    fn from(e: CanvasError) -> Self {
        Diagnostic::Render(e)
    }
}

impl From<ResourceError> for Diagnostic {
    fn from(e: ResourceError) -> Self {
        Diagnostic::Resource(e)
    }
}

/// Receives diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}
