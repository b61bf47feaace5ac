use glam::Vec3;

/// Decides whether a position is far enough from every exclusion zone to
/// deserve a marker.
///
/// A zone exactly on the radius counts as near.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EligibilityFilter {
    exclusion_radius: f32,
}

impl EligibilityFilter {
    pub fn new(exclusion_radius: f32) -> Self {
        Self { exclusion_radius }
    }

    pub fn exclusion_radius(&self) -> f32 {
        self.exclusion_radius
    }

    pub fn is_eligible(&self, position: Vec3, zones: &[Vec3]) -> bool {
        self.excluding_distance(position, zones).is_none()
    }

    /// Distance to the first zone found within the exclusion radius, if any
    pub fn excluding_distance(&self, position: Vec3, zones: &[Vec3]) -> Option<f32> {
        zones
            .iter()
            .map(|zone| zone.distance(position))
            .find(|distance| *distance <= self.exclusion_radius)
    }
}
