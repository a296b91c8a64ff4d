use crate::assets::AssetTag;
use crate::coords::Rect;
use crate::paint::{Blend, Color, Flip};
use crate::scene::{RenderDescriptor, RenderLayeredMessage, Transform};

/// A textured quad.
///
/// Also the element record of [`SpritesDescriptor`]: plain data, meant to be
/// rewritten in place by its producer from frame to frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub transform: Transform,
    /// Source texels. [`Rect::zero`] selects the whole texture.
    pub inset: Rect,
    pub image: AssetTag,
    pub color: Color,
    pub blend: Blend,
    /// Additive highlight pass; skipped when fully transparent.
    pub glow: Color,
    pub flip: Flip,
}

impl Sprite {
    /// Opaque, unglowing sprite showing the whole of `image`.
    pub fn new(transform: Transform, image: AssetTag) -> Self {
        Self {
            transform,
            inset: Rect::zero(),
            image,
            color: Color::WHITE,
            blend: Blend::Transparent,
            glow: Color::ZERO,
            flip: Flip::None,
        }
    }
}

/// Batch of sprites sharing one layer slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpritesDescriptor {
    pub sprites: Vec<Sprite>,
}

impl RenderLayeredMessage {
    /// Layers a single sprite by its own transform and image.
    pub fn sprite(sprite: Sprite) -> Self {
        Self::new(
            sprite.transform.elevation,
            sprite.transform.origin().y,
            sprite.image.clone(),
            RenderDescriptor::Sprite(sprite),
        )
    }

    /// Layers a sprite batch as one unit at the given slot.
    pub fn sprites(elevation: f32, position_y: f32, asset_tag: AssetTag, sprites: Vec<Sprite>) -> Self {
        Self::new(elevation, position_y, asset_tag, RenderDescriptor::Sprites(SpritesDescriptor { sprites }))
    }
}
