use super::Vec2;

/// Axis-aligned rectangle.
///
/// In device space the origin is the top-left corner (+Y down). Texture insets
/// use the same convention in texel units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// The all-zero rectangle, used as the "whole texture" inset sentinel.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.origin.is_zero() && self.size.is_zero()
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Center of the rectangle relative to its own origin.
    #[inline]
    pub fn local_center(self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Overlapping region, or `None` when the rectangles only touch or are disjoint.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = (self.origin.x + self.size.x).min(other.origin.x + other.size.x);
        let y1 = (self.origin.y + self.size.y).min(other.origin.y + other.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        self.intersect(other).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn zero_sentinel() {
        assert!(Rect::zero().is_zero());
        assert!(Rect::default().is_zero());
        assert!(!r(0.0, 0.0, 16.0, 16.0).is_zero());
        assert!(!r(1.0, 0.0, 0.0, 0.0).is_zero());
    }

    #[test]
    fn local_center_is_half_size() {
        assert_eq!(r(100.0, 50.0, 32.0, 16.0).local_center(), Vec2::new(16.0, 8.0));
    }

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_is_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(b));
    }

    #[test]
    fn intersect_negative_origin() {
        // A tile hanging off the top-left of the screen still overlaps it.
        let screen = r(0.0, 0.0, 320.0, 240.0);
        let tile = r(-8.0, -8.0, 16.0, 16.0);
        assert_eq!(screen.intersect(tile), Some(r(0.0, 0.0, 8.0, 8.0)));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
