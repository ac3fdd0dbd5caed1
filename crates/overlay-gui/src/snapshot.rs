use crate::color::Color;
use crate::math::{Interpolate, Rotation, Vec2, Vec3};

/// The animatable attributes of an element
///
/// A node keeps its live geometry and colors in one of these, and animations
/// capture copies of it as start and end snapshots. Discrete attributes such
/// as text content or the enabled flag are deliberately not part of it and are
/// mutated outside the animation system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementState {
    pub size: Vec3,
    pub color: Color,
    pub stroke_color: Color,
    /// Anchor inside the parent, (0, 0) top-left to (1, 1) bottom-right
    pub align: Vec2,
    /// Anchor inside the element itself
    pub origin: Vec2,
    /// Final pixel-space nudge
    pub offset: Vec3,
    pub rotation: Rotation,
}

impl ElementState {
    /// Frozen copy of the current state
    pub fn capture(&self) -> Self {
        *self
    }

    /// Overwrite `target` with `snapshot`. Used as the apply step of chains.
    pub fn apply(target: &mut ElementState, snapshot: &ElementState) {
        *target = *snapshot;
    }
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            size: Vec3::ZERO,
            color: Color::BLACK,
            stroke_color: Color::TRANSPARENT,
            align: Vec2::ZERO,
            origin: Vec2::ZERO,
            offset: Vec3::ZERO,
            rotation: Rotation::ZERO,
        }
    }
}

impl Interpolate for ElementState {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Self {
            size: self.size.interpolate(&other.size, t),
            color: self.color.interpolate(&other.color, t),
            stroke_color: self.stroke_color.interpolate(&other.stroke_color, t),
            align: self.align.interpolate(&other.align, t),
            origin: self.origin.interpolate(&other.origin, t),
            offset: self.offset.interpolate(&other.offset, t),
            rotation: self.rotation.interpolate(&other.rotation, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pair() -> (ElementState, ElementState) {
        let a = ElementState {
            size: Vec3::new(13.3, 7.1, 0.0),
            color: Color::rgba(10, 20, 30, 0.3),
            align: Vec2::new(0.1, 0.9),
            offset: Vec3::new(-3.7, 0.2, 1.0),
            rotation: Rotation::degrees(17.0),
            ..Default::default()
        };
        let b = ElementState {
            size: Vec3::new(200.9, 0.7, 0.0),
            color: Color::rgba(255, 0, 99, 0.9),
            stroke_color: Color::WHITE,
            align: Vec2::new(0.5, 0.5),
            origin: Vec2::new(0.5, 1.0),
            offset: Vec3::new(40.1, -9.9, 1.0),
            rotation: Rotation::degrees(-350.0),
        };
        (a, b)
    }

    #[test]
    fn test_snapshot_boundaries_are_exact() {
        let (a, b) = sample_pair();
        assert_eq!(a.interpolate(&b, 0.0), a);
        assert_eq!(a.interpolate(&b, 1.0), b);
    }

    #[test]
    fn test_snapshot_midpoint() {
        let (a, b) = sample_pair();
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.origin, Vec2::new(0.25, 0.5));
        assert_eq!(mid.rotation.degrees, -166.5);
    }
}
