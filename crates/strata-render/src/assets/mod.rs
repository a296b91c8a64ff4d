//! Render asset loading and lookup.
//!
//! Responsibilities:
//! - identify assets by (package, name)
//! - resolve packages to files and load them through the backend by extension
//! - own every loaded texture/font handle and release each exactly once

mod asset;
mod cache;
mod error;
mod loader;
mod resolver;
mod tag;

pub use asset::{free_asset, AssetKind, RenderAsset};
pub use cache::AssetCache;
pub use error::{AssetError, ResolveError};
pub use loader::{load_render_asset, parse_font_size, AssetFormat};
pub use resolver::{DirectoryResolver, MemoryResolver, PackageFile, PackageResolver};
pub use tag::AssetTag;
