use crate::assets::{AssetCache, AssetKind, AssetTag, RenderAsset};

use super::view::{Eye, Projection, ViewMatrices};
use super::{DrawError, FontId, RenderBackend, TextureId};

/// Everything a driver (or a [`CustomDraw`](crate::scene::CustomDraw)) needs
/// while the sorted layered messages are drawn.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn RenderBackend,
    pub assets: &'a mut AssetCache,
    pub views: &'a ViewMatrices,
    pub eye: Eye,
    pub virtual_scale: f32,
}

impl<'a> DrawContext<'a> {
    /// Projection for primitives anchored by `absolute`.
    #[inline]
    pub fn projection(&self, absolute: bool) -> Projection {
        Projection::new(self.views, self.eye, absolute, self.virtual_scale)
    }

    #[inline]
    pub fn find_asset(&mut self, tag: &AssetTag) -> Option<RenderAsset> {
        self.assets.try_find_asset(&mut *self.backend, tag)
    }

    /// Resolves `tag` to a texture, or the reason it cannot be drawn.
    pub fn find_texture(&mut self, tag: &AssetTag) -> Result<TextureId, DrawError> {
        match self.find_asset(tag) {
            Some(RenderAsset::Texture(texture)) => Ok(texture),
            Some(_) => Err(DrawError::WrongAssetKind { tag: tag.clone(), expected: AssetKind::Texture }),
            None => Err(DrawError::AssetNotFound(tag.clone())),
        }
    }

    /// Resolves `tag` to a font, or the reason it cannot be drawn.
    pub fn find_font(&mut self, tag: &AssetTag) -> Result<FontId, DrawError> {
        match self.find_asset(tag) {
            Some(RenderAsset::Font { font, .. }) => Ok(font),
            Some(_) => Err(DrawError::WrongAssetKind { tag: tag.clone(), expected: AssetKind::Font }),
            None => Err(DrawError::AssetNotFound(tag.clone())),
        }
    }
}
