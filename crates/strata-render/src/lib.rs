//! Message-driven 2D frame renderer.
//!
//! Producers describe what to draw as [`scene`] descriptors wrapped in
//! layered messages. Each frame the [`render::Renderer`] sorts them
//! back-to-front, resolves their [`assets`] through a package cache and
//! issues blits on a [`render::RenderBackend`].

pub mod assets;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
