use std::collections::{hash_map::Keys, HashMap};

use glam::Vec3;
use log::{debug, warn};

use mapcrate_shared::{EntityId, MarkerStyle, MarkerTransport};

use crate::{EligibilityFilter, RegisterError};

/// Owns one marker per registered entity.
///
/// Every key maps to a marker created at the entity's position when it was
/// registered. Markers are never moved. Dropping the registry destroys every
/// marker it still owns.
pub struct MarkerRegistry<T: MarkerTransport> {
    transport: T,
    filter: EligibilityFilter,
    style: MarkerStyle,
    markers: HashMap<EntityId, T::Handle>,
}

impl<T: MarkerTransport> MarkerRegistry<T> {
    pub fn new(transport: T, filter: EligibilityFilter, style: MarkerStyle) -> Self {
        Self {
            transport,
            filter,
            style,
            markers: HashMap::new(),
        }
    }

    /// Creates and broadcasts a marker for the entity if it has none yet and
    /// no zone in `zones` is within the exclusion radius.
    ///
    /// An `Err` describes why nothing happened; the registry is unchanged.
    pub fn try_register(
        &mut self,
        entity_id: EntityId,
        position: Vec3,
        zones: &[Vec3],
    ) -> Result<(), RegisterError> {
        if !entity_id.is_valid() {
            return Err(RegisterError::InvalidEntityId);
        }

        if self.markers.contains_key(&entity_id) {
            return Err(RegisterError::AlreadyRegistered { entity_id });
        }

        if let Some(distance) = self.filter.excluding_distance(position, zones) {
            return Err(RegisterError::Excluded {
                entity_id,
                distance,
            });
        }

        let Some(marker) = self.transport.create(position, &self.style) else {
            warn!("could not create marker for entity {}", entity_id);
            return Err(RegisterError::CreateFailed { entity_id });
        };

        self.transport.broadcast(&marker);
        self.markers.insert(entity_id, marker);

        debug!("marker created for entity {} at {}", entity_id, position);

        Ok(())
    }

    /// Destroys the entity's marker and forgets it. Returns false if the
    /// entity had no marker.
    pub fn unregister(&mut self, entity_id: &EntityId) -> bool {
        let Some(marker) = self.markers.remove(entity_id) else {
            return false;
        };

        if !self.transport.is_destroyed(&marker) {
            self.transport.destroy(&marker);
        }

        debug!("marker removed for entity {}", entity_id);

        true
    }

    /// Destroys every owned marker and empties the registry. Returns how many
    /// entries were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.markers.len();

        for (_, marker) in self.markers.drain() {
            if !self.transport.is_destroyed(&marker) {
                self.transport.destroy(&marker);
            }
        }

        count
    }

    /// Re-sends every live marker to the observers. Returns how many markers
    /// were broadcast.
    pub fn rebroadcast_all(&mut self) -> usize {
        let mut count = 0;

        for marker in self.markers.values() {
            if self.transport.is_destroyed(marker) {
                continue;
            }
            self.transport.broadcast(marker);
            count += 1;
        }

        count
    }

    pub fn contains(&self, entity_id: &EntityId) -> bool {
        self.markers.contains_key(entity_id)
    }

    pub fn marker(&self, entity_id: &EntityId) -> Option<&T::Handle> {
        self.markers.get(entity_id)
    }

    pub fn entity_ids(&self) -> Keys<'_, EntityId, T::Handle> {
        self.markers.keys()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn filter(&self) -> &EligibilityFilter {
        &self.filter
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T: MarkerTransport> Drop for MarkerRegistry<T> {
    fn drop(&mut self) {
        let count = self.clear();
        if count > 0 {
            debug!("registry dropped, destroyed {} markers", count);
        }
    }
}
