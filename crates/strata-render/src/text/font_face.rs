use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use thiserror::Error;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::TextSurface;

/// Error returned by [`FontFace::from_bytes`].
#[derive(Error, Debug, Clone)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// A parsed font bound to one pixel size.
///
/// Layout runs in y-down coordinates with the first line's top at zero, the
/// same frame a [`TextSurface`] uses.
pub struct FontFace {
    font: fontdue::Font,
    px: f32,
}

impl FontFace {
    /// Parses a TrueType or OpenType font for rendering at `point_size` pixels.
    pub fn from_bytes(bytes: &[u8], point_size: u16) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font, px: f32::from(point_size) })
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.px
    }

    /// Pixel extent of `text`, wrapped at `max_width` when given.
    ///
    /// Width is the furthest pen position (advance extent, not bitmap edge);
    /// height is at least one line.
    #[must_use]
    pub fn measure(&self, text: &str, max_width: Option<f32>) -> Vec2 {
        let layout = self.layout(text, max_width);
        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, self.line_height());
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = self.font.metrics_indexed(g.key.glyph_index, self.px);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = layout.height().max(self.line_height());
        Vec2::new(w, h)
    }

    /// Rasterizes `text` into a straight-alpha RGBA surface tinted by `color`.
    ///
    /// Glyph coverage becomes alpha; RGB is the tint everywhere. Overlapping
    /// glyphs keep the larger coverage.
    pub fn rasterize(&self, text: &str, color: Color, max_width: Option<f32>) -> TextSurface {
        let size = self.measure(text, max_width);
        let width = size.x.ceil().max(0.0) as u32;
        let height = size.y.ceil().max(0.0) as u32;

        let [r, g, b, a] = color.to_rgba8();
        let mut surface = TextSurface::filled(width, height, [r, g, b, 0]);

        let layout = self.layout(text, max_width);
        for glyph in layout.glyphs() {
            if !glyph.char_data.rasterize() || glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (metrics, coverage) = self.font.rasterize_config(glyph.key);
            let gx = glyph.x.round() as i64;
            let gy = glyph.y.round() as i64;

            for row in 0..metrics.height {
                let y = gy + row as i64;
                if y < 0 || y >= i64::from(height) {
                    continue;
                }
                for col in 0..metrics.width {
                    let x = gx + col as i64;
                    if x < 0 || x >= i64::from(width) {
                        continue;
                    }
                    let alpha = (u16::from(coverage[row * metrics.width + col]) * u16::from(a) / 255) as u8;
                    let texel = (y as usize * width as usize + x as usize) * 4 + 3;
                    surface.pixels[texel] = surface.pixels[texel].max(alpha);
                }
            }
        }

        surface
    }

    fn line_height(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map_or(self.px * 1.2, |m| m.new_line_size)
    }

    fn layout(&self, text: &str, max_width: Option<f32>) -> Layout<()> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[&self.font], &TextStyle::new(text, self.px, 0));
        layout
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace").field("px", &self.px).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_not_a_font() {
        let err = FontFace::from_bytes(b"definitely not a font", 18).unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }
}
