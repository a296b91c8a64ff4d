use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail};

use crate::coords::Vec2;
use crate::paint::{Blend, Color};

use super::{BlitParams, FontId, RenderBackend, TextSurface, TextureId};

/// One call received by a [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    LoadTexture { path: PathBuf, texture: TextureId },
    DestroyTexture(TextureId),
    LoadFont { path: PathBuf, point_size: u16, font: FontId },
    CloseFont(FontId),
    RasterizeText { font: FontId, text: String, wrap_width: Option<f32> },
    CreateTexture { texture: TextureId, width: u32, height: u32 },
    SetBlendMode(TextureId, Blend),
    SetColorMod(TextureId, Color),
    Blit(TextureId, BlitParams),
    Flush,
}

/// Deterministic in-memory backend.
///
/// Files are registered up front by path (`with_texture`, `with_font`);
/// loading anything else fails. Every load hands out a fresh handle, and
/// every call is appended to [`calls`](Self::calls).
///
/// Fonts use fixed metrics: each character advances `point_size / 2` pixels
/// and a line is `point_size` pixels tall.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    texture_files: HashMap<PathBuf, (u32, u32)>,
    font_files: HashSet<PathBuf>,
    textures: HashMap<TextureId, (u32, u32)>,
    fonts: HashMap<FontId, u16>,
    next_id: u64,
    calls: Vec<BackendCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an image file of `width` x `height` texels.
    pub fn with_texture(mut self, path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        self.texture_files.insert(path.into(), (width, height));
        self
    }

    /// Registers a font file.
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_files.insert(path.into());
        self
    }

    #[inline]
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Blits in submission order.
    pub fn blits(&self) -> Vec<(TextureId, BlitParams)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::Blit(texture, params) => Some((*texture, *params)),
                _ => None,
            })
            .collect()
    }

    /// Textures created and not yet destroyed.
    #[inline]
    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }

    /// Fonts opened and not yet closed.
    #[inline]
    pub fn live_fonts(&self) -> usize {
        self.fonts.len()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn advance(point_size: u16) -> f32 {
        f32::from(point_size) * 0.5
    }
}

impl RenderBackend for RecordingBackend {
    fn load_texture(&mut self, path: &Path) -> anyhow::Result<TextureId> {
        let size = *self
            .texture_files
            .get(path)
            .ok_or_else(|| anyhow!("no image registered at {}", path.display()))?;
        let texture = TextureId(self.next_id());
        self.textures.insert(texture, size);
        self.calls.push(BackendCall::LoadTexture { path: path.to_owned(), texture });
        Ok(texture)
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        self.textures.remove(&texture);
        self.calls.push(BackendCall::DestroyTexture(texture));
    }

    fn load_font(&mut self, path: &Path, point_size: u16) -> anyhow::Result<FontId> {
        if !self.font_files.contains(path) {
            bail!("no font registered at {}", path.display());
        }
        let font = FontId(self.next_id());
        self.fonts.insert(font, point_size);
        self.calls.push(BackendCall::LoadFont { path: path.to_owned(), point_size, font });
        Ok(font)
    }

    fn close_font(&mut self, font: FontId) {
        self.fonts.remove(&font);
        self.calls.push(BackendCall::CloseFont(font));
    }

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&texture).copied()
    }

    fn text_size(&self, font: FontId, text: &str) -> Option<Vec2> {
        let point_size = *self.fonts.get(&font)?;
        let chars = text.chars().count() as f32;
        Some(Vec2::new(chars * Self::advance(point_size), f32::from(point_size)))
    }

    fn rasterize_text(
        &mut self,
        font: FontId,
        text: &str,
        color: Color,
        wrap_width: Option<f32>,
    ) -> Option<TextSurface> {
        let point_size = *self.fonts.get(&font)?;
        self.calls.push(BackendCall::RasterizeText {
            font,
            text: text.to_owned(),
            wrap_width,
        });

        let advance = Self::advance(point_size);
        let chars = text.chars().count();
        let per_line = match wrap_width {
            Some(width) if advance > 0.0 => ((width / advance) as usize).max(1),
            _ => chars.max(1),
        };
        let lines = chars.div_ceil(per_line);
        let width = (chars.min(per_line) as f32 * advance) as u32;
        let height = lines as u32 * u32::from(point_size);

        Some(TextSurface::filled(width, height, color.to_rgba8()))
    }

    fn create_texture_from_surface(&mut self, surface: &TextSurface) -> Option<TextureId> {
        let texture = TextureId(self.next_id());
        self.textures.insert(texture, (surface.width, surface.height));
        self.calls.push(BackendCall::CreateTexture {
            texture,
            width: surface.width,
            height: surface.height,
        });
        Some(texture)
    }

    fn set_blend_mode(&mut self, texture: TextureId, blend: Blend) {
        self.calls.push(BackendCall::SetBlendMode(texture, blend));
    }

    fn set_color_mod(&mut self, texture: TextureId, color: Color) {
        self.calls.push(BackendCall::SetColorMod(texture, color));
    }

    fn blit(&mut self, texture: TextureId, params: &BlitParams) {
        self.calls.push(BackendCall::Blit(texture, *params));
    }

    fn flush(&mut self) {
        self.calls.push(BackendCall::Flush);
    }
}
