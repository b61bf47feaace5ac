use glam::Vec3;

use crate::MarkerStyle;

/// Creates, destroys and pushes map markers to the host's observers.
///
/// A handle returned by [`MarkerTransport::create`] is owned by whoever
/// asked for it; the transport only has to answer whether it is still alive.
pub trait MarkerTransport {
    type Handle;

    /// Spawns a marker at `position`. Returns `None` when the host could not
    /// create one, in which case nothing must be registered for it.
    fn create(&mut self, position: Vec3, style: &MarkerStyle) -> Option<Self::Handle>;

    /// Removes a marker from the map
    fn destroy(&mut self, marker: &Self::Handle);

    /// Returns true if the marker is gone, whether destroyed through this
    /// transport or by the host itself
    fn is_destroyed(&self, marker: &Self::Handle) -> bool;

    /// Pushes the marker's current state to every connected observer
    /// immediately
    fn broadcast(&mut self, marker: &Self::Handle);
}
