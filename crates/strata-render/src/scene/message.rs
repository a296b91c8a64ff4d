use crate::assets::AssetTag;

use super::{LayerKey, RenderDescriptor};

/// A draw request placed in the frame's back-to-front order.
///
/// `elevation` and `position_y` decide the order; `asset_tag` only breaks
/// ties and is never looked up while sorting.
#[derive(Debug, Clone)]
pub struct RenderLayeredMessage {
    pub elevation: f32,
    pub position_y: f32,
    pub asset_tag: AssetTag,
    pub descriptor: RenderDescriptor,
}

impl RenderLayeredMessage {
    pub fn new(elevation: f32, position_y: f32, asset_tag: AssetTag, descriptor: RenderDescriptor) -> Self {
        Self { elevation, position_y, asset_tag, descriptor }
    }

    #[inline]
    pub fn key(&self) -> LayerKey<'_> {
        LayerKey::new(self.elevation, self.position_y, &self.asset_tag)
    }
}

/// Control envelope accepted by the general message queue.
#[derive(Debug, Clone)]
pub enum RenderMessage {
    /// A layered draw routed through the general queue.
    Layered(Box<RenderLayeredMessage>),
    /// Load the named package ahead of use.
    HintPackageUse(String),
    /// Release the named package.
    HintPackageDisuse(String),
    /// Reload every loaded package from disk.
    ReloadAssets,
}

impl From<RenderLayeredMessage> for RenderMessage {
    fn from(message: RenderLayeredMessage) -> Self {
        RenderMessage::Layered(Box::new(message))
    }
}
