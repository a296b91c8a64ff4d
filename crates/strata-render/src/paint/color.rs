/// Straight-alpha RGBA color, channels in `[0, 1]`.
///
/// Backends receive it as a color modulation: each texel is multiplied by it
/// component-wise (alpha included).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Quantizes to bytes, clamping out-of-range channels.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// True when a pass drawn with this color would contribute nothing.
    ///
    /// Decided on the quantized alpha so that tiny float residue does not
    /// trigger a pass the backend would render fully transparent anyway.
    #[inline]
    pub fn is_invisible(self) -> bool {
        self.to_rgba8()[3] == 0
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_round_trip_of_extremes() {
        assert_eq!(Color::from_rgba8(255, 0, 128, 255).to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn invisible_is_decided_on_quantized_alpha() {
        assert!(Color::ZERO.is_invisible());
        assert!(Color::WHITE.with_alpha(0.001).is_invisible());
        assert!(!Color::WHITE.with_alpha(0.01).is_invisible());
    }
}
