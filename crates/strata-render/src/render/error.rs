use thiserror::Error;

use crate::assets::{AssetKind, AssetTag};

/// Why a primitive was skipped this frame.
///
/// Never fatal: the frame driver logs it and moves on to the next message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Neither the package nor an on-the-fly load produced the asset.
    #[error("unloadable asset {0}")]
    AssetNotFound(AssetTag),

    /// The asset exists but is of the wrong kind for this primitive.
    #[error("asset {tag} is not a {expected}")]
    WrongAssetKind { tag: AssetTag, expected: AssetKind },

    /// A tile layer references a tileset image that is missing or not a texture.
    #[error("unloadable tileset image {0}")]
    UnloadableTileset(AssetTag),

    /// The backend produced no raster or texture for a text run.
    #[error("text with font {0} could not be rasterized")]
    TextRasterization(AssetTag),
}

impl DrawError {
    /// Type mismatches are caller bugs rather than missing content; logged quieter.
    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, DrawError::WrongAssetKind { .. })
    }
}
