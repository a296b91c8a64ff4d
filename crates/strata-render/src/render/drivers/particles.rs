use crate::coords::Rect;
use crate::render::{DrawContext, DrawError};
use crate::scene::ParticlesDescriptor;

use super::common::{blit_passes, centered_blit};

/// Draws a particle batch.
///
/// The texture lookup, its size and the projection (including the half-eye
/// camera offset) are resolved once for the whole batch.
pub(crate) fn draw_particles(ctx: &mut DrawContext<'_>, batch: &ParticlesDescriptor) -> Result<(), DrawError> {
    let texture = ctx.find_texture(&batch.image)?;
    let projection = ctx.projection(batch.absolute);
    let full = match ctx.backend.texture_size(texture) {
        Some((w, h)) => Rect::new(0.0, 0.0, w as f32, h as f32),
        None => Rect::zero(),
    };

    for particle in &batch.particles {
        let transform = &particle.transform;
        let dst = projection.device_rect(transform.origin(), transform.size);
        let src = if particle.inset.is_zero() { full } else { particle.inset };
        let params = centered_blit(src, dst, transform.rotation, particle.flip);
        blit_passes(&mut *ctx.backend, texture, &params, particle.color, batch.blend, particle.glow);
    }
    Ok(())
}
