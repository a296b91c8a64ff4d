//! Coordinate and geometry types shared by the drivers and backends.
//!
//! Two spaces are in play:
//! - engine space: right-handed, +X right, +Y up, transformed by view matrices
//! - device space: pixels, origin top-left, +X right, +Y down
//!
//! Drivers convert from the first to the second; backends only ever see device space.

mod affine;
mod rect;
mod vec2;

pub use affine::Affine2;
pub use rect::Rect;
pub use vec2::Vec2;
