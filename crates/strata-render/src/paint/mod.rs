//! Style attributes carried by draw descriptors.
//!
//! Scope:
//! - color modulation (straight alpha)
//! - blend mode per pass
//! - texel mirroring
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;

pub use blend::{Blend, Flip};
pub use color::Color;
