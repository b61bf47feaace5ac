//! # MapCrate Server
//! Places a map marker on every spawned crate that is not near an
//! exclusion zone, removes it exactly when the crate goes away, and
//! re-announces live markers to observers shortly after they connect.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use mapcrate_shared::{
        Color, EntityId, MarkerShape, MarkerStyle, MarkerTransport, ObserverKey, Sessions,
        TimeQueue, TrackedEntity, Vec3, WorldRef,
    };
}

mod eligibility;
mod error;
mod events;
mod registry;
mod server;

pub use eligibility::EligibilityFilter;
pub use error::RegisterError;
pub use events::HostEvent;
pub use registry::MarkerRegistry;
pub use server::{MarkerConfig, MarkerServer};
