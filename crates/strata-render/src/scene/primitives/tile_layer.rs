use crate::assets::AssetTag;
use crate::coords::Vec2;
use crate::paint::{Color, Flip};
use crate::scene::{RenderDescriptor, RenderLayeredMessage, Transform};

/// One cell of a tile layer. `gid == 0` is the empty tile.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Tile {
    pub gid: u32,
    pub flip: Flip,
}

impl Tile {
    #[inline]
    pub const fn new(gid: u32) -> Self {
        Self { gid, flip: Flip::None }
    }
}

/// A tileset referenced by a layer, as parsed from the tile map.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    /// First global tile id this tileset covers.
    pub first_gid: u32,
    /// Number of tiles; absent in some map files.
    pub tile_count: Option<u32>,
    pub image: AssetTag,
    /// Image width in pixels; the texture size is used when absent.
    pub image_width: Option<u32>,
}

/// One layer of a tile map.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerDescriptor {
    /// Layer placement; `position - offset` is the layer's bottom-left corner.
    pub transform: Transform,
    pub color: Color,
    pub glow: Color,
    /// Columns and rows.
    pub map_size: (u32, u32),
    /// Size of one tile in engine units.
    pub tile_size: Vec2,
    /// Size of one tile in tileset texels.
    pub tile_source_size: (u32, u32),
    /// Row-major, row 0 at the top.
    pub tiles: Vec<Tile>,
    pub tile_sets: Vec<TileSet>,
}

impl RenderLayeredMessage {
    /// Layers a tile layer; ties break on its first tileset image.
    pub fn tile_layer(layer: TileLayerDescriptor) -> Self {
        let tag = layer.tile_sets.first().map(|set| set.image.clone()).unwrap_or_default();
        Self::new(
            layer.transform.elevation,
            layer.transform.origin().y,
            tag,
            RenderDescriptor::TileLayer(layer),
        )
    }
}
