//! Image resource loading

use meridian_display::BitmapHandle;

use crate::weather::ResourceId;

/// Errors when loading a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// No resource with this id
    NotFound(ResourceId),
    /// Not enough memory to hold the image
    OutOfMemory,
}

/// Loads images into handles the canvas can draw
pub trait ResourceLoader {
    fn load(&mut self, resource: ResourceId) -> Result<BitmapHandle, ResourceError>;

    /// Free a handle returned by `load`
    fn release(&mut self, handle: BitmapHandle);
}
