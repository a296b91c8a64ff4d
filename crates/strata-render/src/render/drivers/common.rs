//! Shared pieces of the per-primitive drivers.

use crate::coords::Rect;
use crate::paint::{Blend, Color, Flip};
use crate::render::view::device_rotation;
use crate::render::{BlitParams, RenderBackend, TextureId};

/// Source rectangle for `inset`; the zero rectangle selects the whole texture.
pub(super) fn source_rect(backend: &dyn RenderBackend, texture: TextureId, inset: Rect) -> Rect {
    if !inset.is_zero() {
        return inset;
    }
    match backend.texture_size(texture) {
        Some((w, h)) => Rect::new(0.0, 0.0, w as f32, h as f32),
        None => Rect::zero(),
    }
}

/// Blit parameters rotating `dst` about its own center.
#[inline]
pub(super) fn centered_blit(src: Rect, dst: Rect, rotation: f32, flip: Flip) -> BlitParams {
    BlitParams {
        src,
        dst,
        rotation: device_rotation(rotation),
        pivot: dst.local_center(),
        flip,
    }
}

/// Color pass with the primitive's blend, then the additive glow pass.
///
/// Each pass is skipped when its color is fully transparent.
pub(super) fn blit_passes(
    backend: &mut dyn RenderBackend,
    texture: TextureId,
    params: &BlitParams,
    color: Color,
    blend: Blend,
    glow: Color,
) {
    if !color.is_invisible() {
        backend.set_blend_mode(texture, blend);
        backend.set_color_mod(texture, color);
        backend.blit(texture, params);
    }
    if !glow.is_invisible() {
        backend.set_blend_mode(texture, Blend::Additive);
        backend.set_color_mod(texture, glow);
        backend.blit(texture, params);
    }
}
