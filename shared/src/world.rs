use glam::Vec3;

use crate::{EntityId, ObserverKey};

/// A live entity of the tracked kind, as reported by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedEntity {
    pub id: EntityId,
    pub position: Vec3,
}

impl TrackedEntity {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self { id, position }
    }
}

/// Read access to the host world
pub trait WorldRef {
    /// All currently live entities of the tracked kind
    fn tracked_entities(&self) -> Vec<TrackedEntity>;

    /// Current positions of every live exclusion zone. Zones move, so this
    /// is queried on every check and never cached.
    fn exclusion_zones(&self) -> Vec<Vec3>;
}

/// Connection status of observer sessions
pub trait Sessions {
    fn is_connected(&self, observer: &ObserverKey) -> bool;
}
