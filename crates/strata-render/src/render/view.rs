use crate::coords::{Affine2, Rect, Vec2};

/// Camera for one frame, in engine units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Eye {
    pub center: Vec2,
    pub size: Vec2,
}

impl Eye {
    #[inline]
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }
}

/// The two view matrices of a frame.
///
/// `absolute` maps screen-anchored primitives (identity: engine origin at the
/// eye center). `relative` maps camera-relative primitives (translated by the
/// negated eye center).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewMatrices {
    pub absolute: Affine2,
    pub relative: Affine2,
}

impl ViewMatrices {
    pub fn new(eye: Eye) -> Self {
        Self {
            absolute: Affine2::IDENTITY,
            relative: Affine2::translation(-eye.center),
        }
    }

    #[inline]
    pub fn select(&self, absolute: bool) -> &Affine2 {
        if absolute { &self.absolute } else { &self.relative }
    }
}

/// Engine-space → device-space mapping for one primitive (or one batch).
///
/// Positions go through the full view matrix, sizes only through its scale.
/// The result is a y-down rectangle anchored at its top-left corner:
///
/// - `x = (view.x + eye.w / 2) * virtual_scale`
/// - `y = (-view.y + eye.h / 2) * virtual_scale - height`
#[derive(Debug, Copy, Clone)]
pub struct Projection {
    view: Affine2,
    view_scale: Vec2,
    half_eye: Vec2,
    virtual_scale: f32,
}

impl Projection {
    pub fn new(views: &ViewMatrices, eye: Eye, absolute: bool, virtual_scale: f32) -> Self {
        let view = *views.select(absolute);
        Self {
            view,
            view_scale: view.scale(),
            half_eye: eye.size * 0.5,
            virtual_scale,
        }
    }

    /// View-space position of an engine-space point.
    #[inline]
    pub fn view_position(&self, position: Vec2) -> Vec2 {
        self.view.transform_point(position)
    }

    /// View-space extent of an engine-space size.
    #[inline]
    pub fn view_size(&self, size: Vec2) -> Vec2 {
        size.scale(self.view_scale)
    }

    #[inline]
    pub fn virtual_scale(&self) -> f32 {
        self.virtual_scale
    }

    /// Device rectangle of the box whose bottom-left is `position`.
    #[inline]
    pub fn device_rect(&self, position: Vec2, size: Vec2) -> Rect {
        self.device_rect_from_view(self.view_position(position), self.view_size(size), Vec2::zero())
    }

    /// Device rectangle of a box already in view space, shifted by a y-down `offset`.
    ///
    /// The rectangle keeps the box's top edge; its height is the box height.
    #[inline]
    pub fn device_rect_from_view(&self, view_position: Vec2, view_size: Vec2, offset: Vec2) -> Rect {
        let vs = self.virtual_scale;
        let height = view_size.y * vs;
        Rect::new(
            (view_position.x + offset.x + self.half_eye.x) * vs,
            (-view_position.y + offset.y + self.half_eye.y) * vs - height,
            view_size.x * vs,
            height,
        )
    }

    /// Device-space bounds of the whole eye.
    #[inline]
    pub fn screen_bounds(&self) -> Rect {
        let vs = self.virtual_scale;
        Rect::new(0.0, 0.0, self.half_eye.x * 2.0 * vs, self.half_eye.y * 2.0 * vs)
    }
}

/// Engine rotation (counter-clockwise radians) to device rotation (clockwise degrees).
#[inline]
pub fn device_rotation(radians: f32) -> f32 {
    -radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eye() -> Eye {
        Eye::new(Vec2::new(100.0, 50.0), Vec2::new(320.0, 180.0))
    }

    #[test]
    fn relative_view_follows_eye() {
        let views = ViewMatrices::new(eye());
        let p = Projection::new(&views, eye(), false, 1.0);
        // a 10x10 box whose bottom-left sits on the eye center lands at screen center,
        // its top edge 10 pixels above it
        assert_eq!(p.device_rect(Vec2::new(100.0, 50.0), Vec2::new(10.0, 10.0)), Rect::new(160.0, 80.0, 10.0, 10.0));
    }

    #[test]
    fn absolute_view_ignores_eye_center() {
        let views = ViewMatrices::new(eye());
        let p = Projection::new(&views, eye(), true, 1.0);
        assert_eq!(p.device_rect(Vec2::zero(), Vec2::new(10.0, 10.0)), Rect::new(160.0, 80.0, 10.0, 10.0));
    }

    #[test]
    fn virtual_scale_scales_everything() {
        let views = ViewMatrices::new(eye());
        let p = Projection::new(&views, eye(), true, 2.0);
        assert_eq!(p.device_rect(Vec2::new(-160.0, -90.0), Vec2::new(4.0, 6.0)), Rect::new(0.0, 348.0, 8.0, 12.0));
        assert_eq!(p.screen_bounds(), Rect::new(0.0, 0.0, 640.0, 360.0));
    }

    #[test]
    fn rotation_is_negated_degrees() {
        assert_eq!(device_rotation(0.0), 0.0);
        assert!((device_rotation(core::f32::consts::FRAC_PI_2) + 90.0).abs() < 1e-4);
    }
}
