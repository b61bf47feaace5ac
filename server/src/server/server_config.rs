use std::{default::Default, time::Duration};

use mapcrate_shared::MarkerStyle;

/// Contains Config properties which will be used by the MarkerServer
#[derive(Clone, Debug)]
pub struct MarkerConfig {
    /// A crate within this distance of any exclusion zone gets no marker.
    /// A zone exactly at this distance counts as near.
    pub exclusion_radius: f32,
    /// How long to wait after an observer connects before re-sending every
    /// marker, so the observer's session can finish initializing
    pub rebroadcast_delay: Duration,
    /// Visual configuration applied to every marker
    pub style: MarkerStyle,
}

impl MarkerConfig {
    pub fn with_exclusion_radius(mut self, exclusion_radius: f32) -> Self {
        self.exclusion_radius = exclusion_radius;
        self
    }

    pub fn with_rebroadcast_delay(mut self, rebroadcast_delay: Duration) -> Self {
        self.rebroadcast_delay = rebroadcast_delay;
        self
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            exclusion_radius: 120.0,
            rebroadcast_delay: Duration::from_secs(2),
            style: MarkerStyle::default(),
        }
    }
}
