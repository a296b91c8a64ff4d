//! Frame rendering.
//!
//! The [`Renderer`] drains the frame's messages, sorts the layered draws and
//! hands each one to its driver. Drivers issue every native call through a
//! borrowed [`RenderBackend`].
//!
//! Convention:
//! - engine space is +Y up; a transform's `position - offset` is its bottom-left
//! - device space is in pixels, top-left origin, +Y down
//! - rotations are counter-clockwise radians in engine space and clockwise
//!   degrees on the device

mod backend;
mod config;
mod context;
mod drivers;
mod error;
mod recording;
mod renderer;
mod view;

pub mod gpu;

pub use backend::{BlitParams, FontId, RenderBackend, TextSurface, TextureId};
pub use config::RendererConfig;
pub use context::DrawContext;
pub use error::DrawError;
pub use recording::{BackendCall, RecordingBackend};
pub use renderer::{FrameStats, Renderer};
pub use view::{device_rotation, Eye, Projection, ViewMatrices};
