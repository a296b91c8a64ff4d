use crate::assets::AssetTag;
use crate::coords::Rect;
use crate::paint::{Blend, Color, Flip};
use crate::scene::{RenderDescriptor, RenderLayeredMessage, Transform};

/// Per-particle record, rewritten in place by the emitter each frame.
///
/// Only position, size, offset and rotation of `transform` are read; layering
/// and anchoring come from the owning [`ParticlesDescriptor`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Particle {
    pub transform: Transform,
    /// Source texels. [`Rect::zero`] selects the whole texture.
    pub inset: Rect,
    pub color: Color,
    pub glow: Color,
    pub flip: Flip,
}

impl Particle {
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            inset: Rect::zero(),
            color: Color::WHITE,
            glow: Color::ZERO,
            flip: Flip::None,
        }
    }
}

/// A particle batch sharing one texture and blend mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticlesDescriptor {
    pub elevation: f32,
    pub position_y: f32,
    pub absolute: bool,
    pub blend: Blend,
    pub image: AssetTag,
    pub particles: Vec<Particle>,
}

impl RenderLayeredMessage {
    pub fn particles(particles: ParticlesDescriptor) -> Self {
        Self::new(
            particles.elevation,
            particles.position_y,
            particles.image.clone(),
            RenderDescriptor::Particles(particles),
        )
    }
}
