use std::path::Path;

use crate::coords::{Rect, Vec2};
use crate::paint::{Blend, Color, Flip};

/// Opaque handle to a texture owned by a [`RenderBackend`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TextureId(pub u64);

/// Opaque handle to a font opened by a [`RenderBackend`] at a fixed point size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FontId(pub u64);

/// Geometry of one blit, all in device pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlitParams {
    /// Source region in texels.
    pub src: Rect,
    /// Destination rectangle, top-left anchored, +Y down.
    pub dst: Rect,
    /// Clockwise rotation in degrees (device handedness).
    pub rotation: f32,
    /// Rotation pivot relative to `dst.origin`.
    pub pivot: Vec2,
    pub flip: Flip,
}

/// Intermediate raster produced by the first step of text rendering.
///
/// Straight-alpha RGBA8, row-major, tightly packed.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSurface {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextSurface {
    /// A `width` x `height` surface with every texel set to `texel`.
    pub fn filled(width: u32, height: u32, texel: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: texel.repeat(Self::texel_count(width, height)),
        }
    }

    /// Texels in a `width` x `height` raster, counted without `u32` overflow.
    #[inline]
    pub fn texel_count(width: u32, height: u32) -> usize {
        width as usize * height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Native drawing context the renderer issues every call through.
///
/// The renderer never owns a backend: it is borrowed for each operation that
/// may load, free or draw. Every texture and font handle handed out by
/// `load_*` is released exactly once by the asset cache through
/// `destroy_texture` / `close_font`.
///
/// Blend mode and color modulation are per-texture state, in the manner of
/// immediate-mode 2D APIs: set them, then blit.
pub trait RenderBackend {
    /// Decodes an image file into a texture.
    fn load_texture(&mut self, path: &Path) -> anyhow::Result<TextureId>;

    fn destroy_texture(&mut self, texture: TextureId);

    /// Opens a font file at `point_size`.
    fn load_font(&mut self, path: &Path, point_size: u16) -> anyhow::Result<FontId>;

    fn close_font(&mut self, font: FontId);

    /// Size of a texture in texels, `None` for unknown handles.
    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)>;

    /// Pixel extent `text` would occupy on a single line.
    fn text_size(&self, font: FontId, text: &str) -> Option<Vec2>;

    /// Rasterizes `text` tinted by `color`, wrapping at `wrap_width` pixels when given.
    fn rasterize_text(
        &mut self,
        font: FontId,
        text: &str,
        color: Color,
        wrap_width: Option<f32>,
    ) -> Option<TextSurface>;

    /// Uploads a raster into a new texture the caller must destroy.
    fn create_texture_from_surface(&mut self, surface: &TextSurface) -> Option<TextureId>;

    fn set_blend_mode(&mut self, texture: TextureId, blend: Blend);

    fn set_color_mod(&mut self, texture: TextureId, color: Color);

    fn blit(&mut self, texture: TextureId, params: &BlitParams);

    /// Submits everything blitted since the previous flush.
    fn flush(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_surface_is_tightly_packed() {
        let surface = TextSurface::filled(3, 2, [1, 2, 3, 4]);
        assert_eq!(surface.pixels.len(), 3 * 2 * 4);
        assert_eq!(&surface.pixels[20..], [1, 2, 3, 4]);
        assert!(!surface.is_empty());
        assert!(TextSurface::filled(0, 5, [0; 4]).is_empty());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn texel_count_exceeds_u32() {
        assert_eq!(TextSurface::texel_count(70_000, 70_000), 4_900_000_000);
    }
}
