//! One draw routine per primitive kind.
//!
//! Each turns engine-space placement plus style into device rectangles and
//! backend calls. Sprites, tiles and particles use the two-pass convention:
//! a color pass with the primitive's blend mode, then an additive glow pass,
//! each skipped when its color is fully transparent.

mod common;
mod particles;
mod sprite;
mod text;
mod tile_layer;

use crate::scene::RenderDescriptor;

use super::{DrawContext, DrawError};

use particles::draw_particles;
use sprite::{draw_sprite, draw_sprites};
use text::draw_text;
use tile_layer::draw_tile_layer;

/// Routes `descriptor` to its driver.
pub(crate) fn draw_descriptor(ctx: &mut DrawContext<'_>, descriptor: &RenderDescriptor) -> Result<(), DrawError> {
    match descriptor {
        RenderDescriptor::Sprite(sprite) => draw_sprite(ctx, sprite),
        RenderDescriptor::Sprites(batch) => draw_sprites(ctx, batch),
        RenderDescriptor::TileLayer(layer) => draw_tile_layer(ctx, layer),
        RenderDescriptor::Text(text) => draw_text(ctx, text),
        RenderDescriptor::Particles(batch) => draw_particles(ctx, batch),
        RenderDescriptor::Callback(drawable) => {
            drawable.draw(ctx);
            Ok(())
        }
    }
}
