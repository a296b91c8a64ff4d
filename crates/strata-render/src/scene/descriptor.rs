use std::sync::Arc;

use crate::scene::primitives::callback::CustomDraw;
use crate::scene::primitives::particles::ParticlesDescriptor;
use crate::scene::primitives::sprite::{Sprite, SpritesDescriptor};
use crate::scene::primitives::text::TextDescriptor;
use crate::scene::primitives::tile_layer::TileLayerDescriptor;

/// Everything the renderer knows how to draw.
///
/// Extending the primitive set:
/// - add a payload module under `scene::primitives::*`
/// - add a variant here
/// - add a `RenderLayeredMessage` constructor inside that payload module
/// - add a matching driver under `render::drivers::*` and route it in the frame driver
#[derive(Debug, Clone)]
pub enum RenderDescriptor {
    Sprite(Sprite),
    Sprites(SpritesDescriptor),
    TileLayer(TileLayerDescriptor),
    Text(TextDescriptor),
    Particles(ParticlesDescriptor),
    Callback(Arc<dyn CustomDraw>),
}

impl RenderDescriptor {
    /// Short variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderDescriptor::Sprite(_) => "sprite",
            RenderDescriptor::Sprites(_) => "sprites",
            RenderDescriptor::TileLayer(_) => "tile layer",
            RenderDescriptor::Text(_) => "text",
            RenderDescriptor::Particles(_) => "particles",
            RenderDescriptor::Callback(_) => "callback",
        }
    }
}
