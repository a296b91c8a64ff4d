use std::fmt;

use crate::render::{FontId, RenderBackend, TextureId};

/// A loaded native resource.
///
/// Owned by the [`AssetCache`](super::AssetCache); the handles are plain ids so
/// lookups can return copies while the cache stays the single owner.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderAsset {
    Texture(TextureId),
    Font { font: FontId, point_size: u16 },
}

impl RenderAsset {
    #[inline]
    pub fn kind(&self) -> AssetKind {
        match self {
            RenderAsset::Texture(_) => AssetKind::Texture,
            RenderAsset::Font { .. } => AssetKind::Font,
        }
    }

    #[inline]
    pub fn texture(&self) -> Option<TextureId> {
        match *self {
            RenderAsset::Texture(texture) => Some(texture),
            RenderAsset::Font { .. } => None,
        }
    }

    #[inline]
    pub fn font(&self) -> Option<FontId> {
        match *self {
            RenderAsset::Font { font, .. } => Some(font),
            RenderAsset::Texture(_) => None,
        }
    }
}

/// Discriminant of [`RenderAsset`], used in diagnostics.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AssetKind {
    Texture,
    Font,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Texture => f.write_str("texture"),
            AssetKind::Font => f.write_str("font"),
        }
    }
}

/// Releases the native handle behind `asset`.
///
/// Must be called exactly once per loaded asset; there is no double-free guard.
pub fn free_asset(backend: &mut dyn RenderBackend, asset: RenderAsset) {
    match asset {
        RenderAsset::Texture(texture) => backend.destroy_texture(texture),
        RenderAsset::Font { font, .. } => backend.close_font(font),
    }
}
