use crate::coords::Vec2;

/// Placement of a primitive in engine space (+Y up).
///
/// `position` is the bottom-left corner before `offset` is applied; the
/// primitive is laid out from `origin()`, so an offset of `size * 0.5`
/// centers it on `position`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub size: Vec2,
    /// Pivot adjustment subtracted from `position`.
    pub offset: Vec2,
    /// Counter-clockwise, in radians.
    pub rotation: f32,
    pub elevation: f32,
    /// Screen-anchored when set, camera-relative otherwise.
    pub absolute: bool,
}

impl Transform {
    #[inline]
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            offset: Vec2::zero(),
            rotation: 0.0,
            elevation: 0.0,
            absolute: false,
        }
    }

    /// Bottom-left corner the primitive is actually drawn from.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.position - self.offset
    }

    #[inline]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    #[inline]
    pub fn absolute(mut self) -> Self {
        self.absolute = true;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::one())
    }
}
