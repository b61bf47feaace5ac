use std::time::Instant;

use log::{debug, info};

use mapcrate_shared::{
    EntityId, MarkerTransport, ObserverKey, Sessions, TimeQueue, TrackedEntity, Vec3, WorldRef,
};

use crate::{EligibilityFilter, HostEvent, MarkerConfig, MarkerRegistry, RegisterError};

/// Routes host lifecycle notifications to the [`MarkerRegistry`].
///
/// The host delivers notifications one at a time and calls
/// [`MarkerServer::update`] regularly so that delayed rebroadcasts can fire.
/// Creation always goes through the exclusion check; destruction never does.
pub struct MarkerServer<T: MarkerTransport> {
    config: MarkerConfig,
    registry: MarkerRegistry<T>,
    pending_rebroadcasts: TimeQueue<ObserverKey>,
    shut_down: bool,
}

impl<T: MarkerTransport> MarkerServer<T> {
    pub fn new(config: MarkerConfig, transport: T) -> Self {
        let filter = EligibilityFilter::new(config.exclusion_radius);
        let registry = MarkerRegistry::new(transport, filter, config.style.clone());

        Self {
            config,
            registry,
            pending_rebroadcasts: TimeQueue::new(),
            shut_down: false,
        }
    }

    // Notifications

    /// Marks every tracked entity already live in the world. Markers are not
    /// persisted, so this is how they come back after a restart.
    pub fn on_init<W: WorldRef>(&mut self, world: &W) {
        if self.shut_down {
            return;
        }

        let entities = world.tracked_entities();
        let zones = world.exclusion_zones();
        let mut registered = 0;
        for entity in &entities {
            if self.register(entity, &zones) {
                registered += 1;
            }
        }

        info!(
            "marked {} of {} existing crates ({} exclusion zones)",
            registered,
            entities.len(),
            zones.len()
        );
    }

    pub fn on_spawn<W: WorldRef>(&mut self, world: &W, entity: &TrackedEntity) {
        if self.shut_down {
            return;
        }

        let zones = world.exclusion_zones();
        self.register(entity, &zones);
    }

    pub fn on_destroy(&mut self, entity_id: &EntityId) {
        if !entity_id.is_valid() {
            return;
        }

        self.registry.unregister(entity_id);
    }

    /// Schedules a one-shot rebroadcast of every marker for after the
    /// configured delay
    pub fn on_observer_join(&mut self, observer: ObserverKey, now: Instant) {
        if self.shut_down {
            return;
        }

        let due = now + self.config.rebroadcast_delay;
        self.pending_rebroadcasts.add_item(due, observer);
    }

    pub fn handle_event<W: WorldRef>(&mut self, world: &W, event: HostEvent, now: Instant) {
        match event {
            HostEvent::Init => self.on_init(world),
            HostEvent::Spawn(entity) => self.on_spawn(world, &entity),
            HostEvent::Destroy(entity_id) => self.on_destroy(&entity_id),
            HostEvent::ObserverJoined(observer) => self.on_observer_join(observer, now),
        }
    }

    /// Runs every rebroadcast that has come due at `now`. Observers that
    /// disconnected in the meantime are skipped. Returns the number of
    /// rebroadcasts that ran.
    pub fn update<S: Sessions>(&mut self, now: &Instant, sessions: &S) -> usize {
        let mut rebroadcasts = 0;

        while let Some(observer) = self.pending_rebroadcasts.pop_item(now) {
            if !sessions.is_connected(&observer) {
                debug!("observer {:?} left before rebroadcast", observer);
                continue;
            }
            let count = self.registry.rebroadcast_all();
            debug!("rebroadcast {} markers for observer {:?}", count, observer);
            rebroadcasts += 1;
        }

        rebroadcasts
    }

    /// Destroys every marker and cancels pending rebroadcasts. Notifications
    /// arriving afterwards are ignored.
    pub fn shutdown(&mut self) {
        let cancelled = self.pending_rebroadcasts.clear();
        let removed = self.registry.clear();
        self.shut_down = true;

        info!(
            "removed {} markers, cancelled {} pending rebroadcasts",
            removed, cancelled
        );
    }

    // Accessors

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    pub fn registry(&self) -> &MarkerRegistry<T> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut MarkerRegistry<T> {
        &mut self.registry
    }

    pub fn pending_rebroadcasts(&self) -> usize {
        self.pending_rebroadcasts.len()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    // Private

    fn register(&mut self, entity: &TrackedEntity, zones: &[Vec3]) -> bool {
        match self
            .registry
            .try_register(entity.id, entity.position, zones)
        {
            Ok(()) => true,
            Err(RegisterError::CreateFailed { .. }) => false,
            Err(reason) => {
                debug!("skipping crate: {}", reason);
                false
            }
        }
    }
}
