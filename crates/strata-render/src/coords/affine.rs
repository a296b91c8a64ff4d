use core::ops::Mul;

use super::Vec2;

/// 2D affine transform (row-major 2x3: linear part + translation).
///
/// `p' = [m11 m12; m21 m22] * p + [tx; ty]`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Affine2 {
    pub const IDENTITY: Self = Self { m11: 1.0, m12: 0.0, m21: 0.0, m22: 1.0, tx: 0.0, ty: 0.0 };

    #[inline]
    pub const fn translation(t: Vec2) -> Self {
        Self { tx: t.x, ty: t.y, ..Self::IDENTITY }
    }

    #[inline]
    pub const fn scaling(s: Vec2) -> Self {
        Self { m11: s.x, m22: s.y, ..Self::IDENTITY }
    }

    /// Counter-clockwise rotation in radians (engine space, +Y up).
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { m11: cos, m12: -sin, m21: sin, m22: cos, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.m11 * p.x + self.m12 * p.y + self.tx,
            self.m21 * p.x + self.m22 * p.y + self.ty,
        )
    }

    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.m11 * v.x + self.m12 * v.y, self.m21 * v.x + self.m22 * v.y)
    }

    /// Per-axis scale, i.e. the lengths of the basis columns.
    ///
    /// Sizes are multiplied by this rather than run through the full matrix so
    /// a rotated or translated view never skews a primitive's extent.
    #[inline]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            (self.m11 * self.m11 + self.m21 * self.m21).sqrt(),
            (self.m12 * self.m12 + self.m22 * self.m22).sqrt(),
        )
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Affine2 {
    type Output = Affine2;

    fn mul(self, b: Affine2) -> Affine2 {
        let a = self;
        Affine2 {
            m11: a.m11 * b.m11 + a.m12 * b.m21,
            m12: a.m11 * b.m12 + a.m12 * b.m22,
            m21: a.m21 * b.m11 + a.m22 * b.m21,
            m22: a.m21 * b.m12 + a.m22 * b.m22,
            tx: a.m11 * b.tx + a.m12 * b.ty + a.tx,
            ty: a.m21 * b.tx + a.m22 * b.ty + a.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let m = Affine2::translation(Vec2::new(-10.0, 4.0));
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(-9.0, 5.0));
        assert_eq!(m.transform_vector(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
        assert_eq!(m.scale(), Vec2::one());
    }

    #[test]
    fn scale_ignores_rotation() {
        let m = Affine2::rotation(0.7) * Affine2::scaling(Vec2::new(2.0, 3.0));
        assert!(close(m.scale(), Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn composition_order() {
        let m = Affine2::translation(Vec2::new(5.0, 0.0)) * Affine2::scaling(Vec2::new(2.0, 2.0));
        // scale first, then translate
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(7.0, 2.0));
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let m = Affine2::rotation(core::f32::consts::FRAC_PI_2);
        assert!(close(m.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }
}
