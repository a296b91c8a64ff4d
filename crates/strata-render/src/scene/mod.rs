//! Draw descriptors and per-frame message queues.
//!
//! Responsibilities:
//! - describe every drawable primitive as plain data
//! - buffer control and layered messages between frames
//! - provide a deterministic paint order (elevation, then Y, then asset tag)

mod descriptor;
mod key;
mod message;
mod queue;
mod transform;

pub mod primitives;

pub use descriptor::RenderDescriptor;
pub use key::LayerKey;
pub use message::{RenderLayeredMessage, RenderMessage};
pub use primitives::callback::CustomDraw;
pub use primitives::particles::{Particle, ParticlesDescriptor};
pub use primitives::sprite::{Sprite, SpritesDescriptor};
pub use primitives::text::{Justification, JustifyHorizontal, JustifyVertical, TextDescriptor};
pub use primitives::tile_layer::{Tile, TileLayerDescriptor, TileSet};
pub use queue::MessageQueue;
pub use transform::Transform;
