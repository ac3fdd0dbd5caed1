use crate::math::{lerp_f32, Interpolate};

/// RGBA color with 0-255 integer channels and a [0, 1] alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgba(r: i32, g: i32, b: i32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: i32, g: i32, b: i32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// with alpha builder method
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Multiply alpha by `factor`, used to dim elements behind a screen
    pub fn scale_alpha(mut self, factor: f32) -> Self {
        self.a *= factor;
        self
    }

    /// Pack into `0xAARRGGBB`
    ///
    /// Channels are clamped into range first, so colors pushed out of bounds by
    /// an overshooting easing still pack to a valid value.
    pub fn to_argb(&self) -> u32 {
        let channel = |c: i32| c.clamp(0, 255) as u32;
        let alpha = (self.a * 255.0).round().clamp(0.0, 255.0) as u32;
        (alpha << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Interpolate for Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let channel = |a: i32, b: i32| lerp_f32(a as f32, b as f32, t).round() as i32;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: lerp_f32(self.a, other.a, t),
        }
    }
}

/// The sixteen legacy `&`-code text colors
pub mod legacy {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 170);
    pub const DARK_GREEN: Color = Color::rgb(0, 170, 0);
    pub const DARK_AQUA: Color = Color::rgb(0, 170, 170);
    pub const DARK_RED: Color = Color::rgb(170, 0, 0);
    pub const DARK_PURPLE: Color = Color::rgb(170, 0, 170);
    pub const GOLD: Color = Color::rgb(255, 170, 0);
    pub const GRAY: Color = Color::rgb(170, 170, 170);
    pub const DARK_GRAY: Color = Color::rgb(85, 85, 85);
    pub const BLUE: Color = Color::rgb(85, 85, 255);
    pub const GREEN: Color = Color::rgb(85, 255, 85);
    pub const AQUA: Color = Color::rgb(85, 255, 255);
    pub const RED: Color = Color::rgb(255, 85, 85);
    pub const LIGHT_PURPLE: Color = Color::rgb(255, 85, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 85);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Look up the color for the character following a `&`
    pub fn from_code(code: char) -> Option<Color> {
        let color = match code.to_ascii_lowercase() {
            '0' => BLACK,
            '1' => DARK_BLUE,
            '2' => DARK_GREEN,
            '3' => DARK_AQUA,
            '4' => DARK_RED,
            '5' => DARK_PURPLE,
            '6' => GOLD,
            '7' => GRAY,
            '8' => DARK_GRAY,
            '9' => BLUE,
            'a' => GREEN,
            'b' => AQUA,
            'c' => RED,
            'd' => LIGHT_PURPLE,
            'e' => YELLOW,
            'f' => WHITE,
            _ => return None,
        };
        Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_argb_clamps_channels() {
        assert_eq!(Color::WHITE.to_argb(), 0xFFFF_FFFF);
        assert_eq!(Color::rgba(300, -20, 128, 1.7).to_argb(), 0xFFFF_0080);
        assert_eq!(Color::rgba(0, 0, 0, 0.5).to_argb() >> 24, 128);
    }

    #[test]
    fn test_interpolate_rounds_channels() {
        let from = Color::rgba(0, 0, 0, 0.0);
        let to = Color::rgba(255, 100, 1, 1.0);
        let mid = from.interpolate(&to, 0.5);
        assert_eq!((mid.r, mid.g, mid.b), (128, 50, 1));
        assert_eq!(mid.a, 0.5);
        assert_eq!(from.interpolate(&to, 0.0), from);
        assert_eq!(from.interpolate(&to, 1.0), to);
    }

    #[test]
    fn test_legacy_codes() {
        assert_eq!(legacy::from_code('c'), Some(legacy::RED));
        assert_eq!(legacy::from_code('F'), Some(legacy::WHITE));
        assert_eq!(legacy::from_code('z'), None);
    }
}
