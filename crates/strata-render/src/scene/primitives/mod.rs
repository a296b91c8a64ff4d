pub(crate) mod callback;
pub(crate) mod particles;
pub(crate) mod sprite;
pub(crate) mod text;
pub(crate) mod tile_layer;
