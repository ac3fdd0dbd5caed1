use crate::math::{Vec2, Vec3};

/// Axis-aligned rectangle in screen space
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    /// Bounds of an element from its resolved position and size (z ignored)
    pub fn from_position_size(position: Vec3, size: Vec3) -> Self {
        Self::from_min_size([position.x, position.y], [size.x, size.y])
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn min_vec(&self) -> Vec2 {
        Vec2::from(self.min)
    }

    /// Zero or negative extent on either axis
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Inclusive point test. Degenerate rectangles contain nothing.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        !self.is_degenerate()
            && x >= self.min[0]
            && x <= self.max[0]
            && y >= self.min[1]
            && y <= self.max[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rect::from_min_size([10.0, 10.0], [20.0, 10.0]);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(30.0, 20.0));
        assert!(!rect.contains(30.1, 15.0));
        assert!(!rect.contains(15.0, 9.9));
    }

    #[test]
    fn test_degenerate_rect_contains_nothing() {
        assert!(!Rect::from_min_size([0.0, 0.0], [0.0, 10.0]).contains(0.0, 5.0));
        assert!(!Rect::from_min_size([0.0, 0.0], [10.0, -4.0]).contains(5.0, 0.0));
    }
}
