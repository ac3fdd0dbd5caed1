pub use glam::{Vec2, Vec3};

/// Values that can be blended between two endpoints by a progress value
///
/// Implementations must return exactly `self` at `t = 0.0` and exactly `other`
/// at `t = 1.0`. Only types implementing this trait can be animated.
pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

/// Linearly interpolate between two f32 values
///
/// Written as a weighted sum so both endpoints are reproduced bit-exactly.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        lerp_f32(*self, *other, t)
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Vec2::new(lerp_f32(self.x, other.x, t), lerp_f32(self.y, other.y, t))
    }
}

impl Interpolate for Vec3 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Vec3::new(
            lerp_f32(self.x, other.x, t),
            lerp_f32(self.y, other.y, t),
            lerp_f32(self.z, other.z, t),
        )
    }
}

/// Rotation around the screen normal, in degrees
///
/// Interpolation is plain affine on the angle with no wraparound: going from
/// 350 to 10 degrees spins backwards through 180. Long-path spins are relied
/// on for visual effects, so angles are never normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub const ZERO: Self = Self { degrees: 0.0 };

    pub const fn degrees(degrees: f32) -> Self {
        Self { degrees }
    }

    pub fn is_zero(&self) -> bool {
        self.degrees == 0.0
    }
}

impl Interpolate for Rotation {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Self::degrees(lerp_f32(self.degrees, other.degrees, t))
    }
}

/// Shorthand for a planar [`Vec3`] with `z = 0`
pub const fn v3(x: f32, y: f32) -> Vec3 {
    Vec3::new(x, y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let (a, b) = (0.1_f32, 0.7_f32);
        assert_eq!(lerp_f32(a, b, 0.0), a);
        assert_eq!(lerp_f32(a, b, 1.0), b);
        assert_eq!(lerp_f32(0.0, 10.0, 0.25), 2.5);
    }

    #[test]
    fn test_vec3_interpolates_per_component() {
        let a = Vec3::new(0.0, 10.0, 5.0);
        let b = Vec3::new(10.0, 20.0, 5.0);
        assert_eq!(a.interpolate(&b, 0.5), Vec3::new(5.0, 15.0, 5.0));
    }

    #[test]
    fn test_rotation_takes_long_path() {
        let from = Rotation::degrees(350.0);
        let to = Rotation::degrees(10.0);
        assert_eq!(from.interpolate(&to, 0.5).degrees, 180.0);
    }
}
