//! Text measurement and rasterization via fontdue.

mod font_face;

pub use font_face::{FontFace, FontLoadError};
