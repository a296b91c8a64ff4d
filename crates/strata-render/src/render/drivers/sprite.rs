use crate::render::view::Projection;
use crate::render::{DrawContext, DrawError};
use crate::scene::{Sprite, SpritesDescriptor};

use super::common::{blit_passes, centered_blit, source_rect};

/// Draws one sprite.
pub(crate) fn draw_sprite(ctx: &mut DrawContext<'_>, sprite: &Sprite) -> Result<(), DrawError> {
    let projection = ctx.projection(sprite.transform.absolute);
    draw_with(ctx, &projection, sprite)
}

/// Draws every sprite of a batch in order.
///
/// A sprite that cannot be drawn does not stop the rest; the first failure
/// is reported once the batch is done.
pub(crate) fn draw_sprites(ctx: &mut DrawContext<'_>, batch: &SpritesDescriptor) -> Result<(), DrawError> {
    let mut first_err = None;
    for sprite in &batch.sprites {
        if let Err(err) = draw_sprite(ctx, sprite) {
            first_err.get_or_insert(err);
        }
    }
    first_err.map_or(Ok(()), Err)
}

fn draw_with(ctx: &mut DrawContext<'_>, projection: &Projection, sprite: &Sprite) -> Result<(), DrawError> {
    let texture = ctx.find_texture(&sprite.image)?;

    let transform = &sprite.transform;
    let dst = projection.device_rect(transform.origin(), transform.size);
    let src = source_rect(&*ctx.backend, texture, sprite.inset);
    let params = centered_blit(src, dst, transform.rotation, sprite.flip);

    blit_passes(&mut *ctx.backend, texture, &params, sprite.color, sprite.blend, sprite.glow);
    Ok(())
}
