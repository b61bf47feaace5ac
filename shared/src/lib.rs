//! # MapCrate Shared
//! Common functionality shared between the mapcrate server and the hosts
//! that drive it: identifiers, marker styles, the time queue, and the
//! narrow traits through which the server reaches the host world, the
//! marker transport and the observer sessions.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use glam::Vec3;

mod marker_style;
mod time_queue;
mod transport;
mod types;
mod world;

pub use marker_style::{Color, MarkerShape, MarkerStyle};
pub use time_queue::TimeQueue;
pub use transport::MarkerTransport;
pub use types::{EntityId, ObserverKey};
pub use world::{Sessions, TrackedEntity, WorldRef};
