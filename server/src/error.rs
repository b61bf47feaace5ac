use mapcrate_shared::EntityId;
use thiserror::Error;

/// Reasons a registration attempt did nothing.
///
/// None of these are failures of the server: duplicate and invalid
/// notifications are normal under an event-driven host. The registry state
/// is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegisterError {
    /// Notification carried the sentinel identifier
    #[error("Entity has no valid network id")]
    InvalidEntityId,

    /// A marker already exists for this entity
    #[error("Entity {entity_id} already has a marker")]
    AlreadyRegistered { entity_id: EntityId },

    /// An exclusion zone is within the exclusion radius
    #[error("Entity {entity_id} is excluded, zone at distance {distance}")]
    Excluded { entity_id: EntityId, distance: f32 },

    /// The transport returned no handle
    #[error("Marker creation failed for entity {entity_id}")]
    CreateFailed { entity_id: EntityId },
}
