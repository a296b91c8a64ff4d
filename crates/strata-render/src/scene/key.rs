use core::cmp::Ordering;

use crate::assets::AssetTag;

/// Paint-order key of a layered message.
///
/// Ordering rules:
/// 1) `elevation`: ascending (back-to-front)
/// 2) `position_y`: descending, so lower-on-screen primitives draw on top
/// 3) asset name, then package name: ascending, plain string order
///
/// Floats compare numerically (`-0.0 == 0.0`) and fall back to the IEEE total
/// order only for NaN, which keeps the comparator total.
#[derive(Debug, Copy, Clone)]
pub struct LayerKey<'a> {
    pub elevation: f32,
    pub position_y: f32,
    pub asset_name: &'a str,
    pub package_name: &'a str,
}

impl<'a> LayerKey<'a> {
    #[inline]
    pub fn new(elevation: f32, position_y: f32, tag: &'a AssetTag) -> Self {
        Self {
            elevation,
            position_y,
            asset_name: &tag.name,
            package_name: &tag.package,
        }
    }
}

#[inline]
fn cmp_f32(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl Ord for LayerKey<'_> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f32(self.elevation, other.elevation)
            .then_with(|| cmp_f32(other.position_y, self.position_y))
            .then_with(|| self.asset_name.cmp(other.asset_name))
            .then_with(|| self.package_name.cmp(other.package_name))
    }
}

impl PartialOrd for LayerKey<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LayerKey<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LayerKey<'_> {}
