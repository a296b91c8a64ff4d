use crate::coords::{Rect, Vec2};
use crate::paint::{Blend, Flip};
use crate::render::{DrawContext, DrawError};
use crate::scene::{Justification, JustifyHorizontal, JustifyVertical, TextDescriptor};

use super::common::centered_blit;

/// Draws a text run.
///
/// The run is rasterized and uploaded every frame; the intermediate surface is
/// dropped before the blit and the texture destroyed right after it.
pub(crate) fn draw_text(ctx: &mut DrawContext<'_>, text: &TextDescriptor) -> Result<(), DrawError> {
    let font = ctx.find_font(&text.font)?;
    if text.text.is_empty() {
        return Ok(());
    }

    let transform = &text.transform;
    let projection = ctx.projection(transform.absolute);
    let view_position = projection.view_position(transform.origin());
    let view_size = projection.view_size(transform.size);

    let (offset, wrap_width) = match text.justification {
        Justification::Unjustified { wrapped } => (Vec2::zero(), wrapped.then_some(view_size.x)),
        Justification::Justified(horizontal, vertical) => {
            let measured = ctx.backend.text_size(font, &text.text).unwrap_or_default();
            (justify_offset(view_size, measured, horizontal, vertical), None)
        }
    };

    let failed = || DrawError::TextRasterization(text.font.clone());
    let surface = ctx
        .backend
        .rasterize_text(font, &text.text, text.color, wrap_width)
        .filter(|surface| !surface.is_empty())
        .ok_or_else(failed)?;
    let texture = ctx.backend.create_texture_from_surface(&surface);
    let (width, height) = (surface.width as f32, surface.height as f32);
    drop(surface);
    let texture = texture.ok_or_else(failed)?;

    // Anchored at the box's top edge; sized by the raster, not the box.
    let anchor = projection.device_rect_from_view(view_position, view_size, offset);
    let vs = projection.virtual_scale();
    let dst = Rect::new(anchor.origin.x, anchor.origin.y, width * vs, height * vs);
    let src = Rect::new(0.0, 0.0, width, height);
    let params = centered_blit(src, dst, transform.rotation, Flip::None);

    ctx.backend.set_blend_mode(texture, Blend::Transparent);
    ctx.backend.blit(texture, &params);
    ctx.backend.destroy_texture(texture);
    Ok(())
}

/// Y-down offset placing a `measured` run inside a box of `size`.
fn justify_offset(
    size: Vec2,
    measured: Vec2,
    horizontal: JustifyHorizontal,
    vertical: JustifyVertical,
) -> Vec2 {
    let x = match horizontal {
        JustifyHorizontal::Left => 0.0,
        JustifyHorizontal::Center => (size.x - measured.x) * 0.5,
        JustifyHorizontal::Right => size.x - measured.x,
    };
    let y = match vertical {
        JustifyVertical::Top => 0.0,
        JustifyVertical::Middle => (size.y - measured.y) * 0.5,
        JustifyVertical::Bottom => size.y - measured.y,
    };
    Vec2::new(x, y)
}
