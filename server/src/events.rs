use mapcrate_shared::{EntityId, ObserverKey, TrackedEntity};

/// Lifecycle notifications a host can queue and deliver through
/// [`MarkerServer::handle_event`](crate::MarkerServer::handle_event).
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// The host finished initializing; rescan the world
    Init,
    /// A tracked entity appeared
    Spawn(TrackedEntity),
    /// A tracked entity went away
    Destroy(EntityId),
    /// An observer connected and should get every marker shortly
    ObserverJoined(ObserverKey),
}
