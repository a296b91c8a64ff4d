use crate::coords::{Rect, Vec2};
use crate::paint::Blend;
use crate::render::{BlitParams, DrawContext, DrawError, TextureId};
use crate::scene::{Tile, TileLayerDescriptor, TileSet};

use super::common::blit_passes;

/// Tileset resolved to a texture for the duration of one layer draw.
struct ResolvedSet<'a> {
    set: &'a TileSet,
    texture: TextureId,
    width: u32,
}

/// Draws a tile layer.
///
/// Every tileset image is resolved up front; if any of them is missing (or not
/// a texture) nothing of the layer is drawn.
pub(crate) fn draw_tile_layer(ctx: &mut DrawContext<'_>, layer: &TileLayerDescriptor) -> Result<(), DrawError> {
    let mut sets = Vec::with_capacity(layer.tile_sets.len());
    for set in &layer.tile_sets {
        let texture = ctx
            .find_texture(&set.image)
            .map_err(|_| DrawError::UnloadableTileset(set.image.clone()))?;
        let width = set
            .image_width
            .or_else(|| ctx.backend.texture_size(texture).map(|(w, _)| w))
            .unwrap_or(0);
        sets.push(ResolvedSet { set, texture, width });
    }

    let projection = ctx.projection(layer.transform.absolute);
    let screen = projection.screen_bounds();
    let origin = layer.transform.origin();
    let (columns, rows) = layer.map_size;
    let (tile_w, tile_h) = (layer.tile_size.x, layer.tile_size.y);
    let (source_w, source_h) = layer.tile_source_size;

    for (n, tile) in layer.tiles.iter().enumerate() {
        if tile.gid == 0 || columns == 0 {
            continue;
        }
        let (i, j) = ((n as u32 % columns) as f32, (n as u32 / columns) as f32);
        let position = Vec2::new(
            origin.x + tile_w * i,
            origin.y + rows as f32 * tile_h - tile_h * (j + 1.0),
        );
        let dst = projection.device_rect(position, layer.tile_size);
        if !dst.intersects(screen) {
            continue;
        }

        let Some((texture, src)) = tile_source(&sets, tile, (source_w, source_h)) else {
            continue;
        };
        let params = BlitParams {
            src,
            dst,
            rotation: 0.0,
            pivot: dst.local_center(),
            flip: tile.flip,
        };
        blit_passes(&mut *ctx.backend, texture, &params, layer.color, Blend::Transparent, layer.glow);
    }
    Ok(())
}

/// Picks the tileset for `tile` and its source rectangle inside it.
///
/// Linear scan over all tilesets: every match overwrites the selection, and
/// the gid offset grows by each tile count until something has been selected.
/// A tileset without a tile count matches every gid.
fn tile_source(sets: &[ResolvedSet<'_>], tile: &Tile, (source_w, source_h): (u32, u32)) -> Option<(TextureId, Rect)> {
    let mut offset: u64 = 1;
    let mut selected: Option<&ResolvedSet<'_>> = None;

    for resolved in sets {
        let set = resolved.set;
        let count = set.tile_count.unwrap_or(0);
        let in_range = tile.gid >= set.first_gid && u64::from(tile.gid) < u64::from(set.first_gid) + u64::from(count);
        // FIXME: a tileset without a tile count should not match every gid.
        if in_range || set.tile_count.is_none() {
            selected = Some(resolved);
        }
        if selected.is_none() {
            offset += u64::from(count);
        }
    }

    let selected = selected?;
    let index = u64::from(tile.gid).checked_sub(offset)?;
    let width = u64::from(selected.width);
    if width == 0 {
        return None;
    }
    let texel = index * u64::from(source_w);
    let src = Rect::new(
        (texel % width) as f32,
        (texel / width * u64::from(source_h)) as f32,
        source_w as f32,
        source_h as f32,
    );
    Some((selected.texture, src))
}
