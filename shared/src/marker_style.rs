/// Shape drawn on the map for a marker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    FilledCircle,
}

/// Linear RGBA color, components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Fixed visual configuration applied to every marker. Nothing in here is
/// derived from the entity a marker belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    /// Radius of the ring, in map units. Kept small so crate rings read
    /// differently from airdrop markers.
    pub radius: f32,
    pub alpha: f32,
    pub color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            shape: MarkerShape::FilledCircle,
            radius: 0.5,
            alpha: 0.6,
            color: Color::BLUE,
        }
    }
}
