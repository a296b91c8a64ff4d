use std::fmt;
use std::sync::Arc;

use crate::assets::AssetTag;
use crate::render::DrawContext;
use crate::scene::{RenderDescriptor, RenderLayeredMessage};

/// Draw logic that does not fit the descriptor model (screen-wide effects,
/// debug overlays, ...).
///
/// Runs at its layer slot with the frame's view matrices, eye and the
/// backend/asset cache, through [`DrawContext`].
pub trait CustomDraw: fmt::Debug + Send + Sync {
    fn draw(&self, ctx: &mut DrawContext<'_>);
}

impl RenderLayeredMessage {
    pub fn callback(
        elevation: f32,
        position_y: f32,
        asset_tag: AssetTag,
        drawable: Arc<dyn CustomDraw>,
    ) -> Self {
        Self::new(elevation, position_y, asset_tag, RenderDescriptor::Callback(drawable))
    }
}
