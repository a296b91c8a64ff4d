use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn one package file into a [`RenderAsset`](super::RenderAsset).
///
/// Always recoverable: the file is skipped and the rest of the package loads.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The extension maps to no known asset format.
    #[error("unknown extension '{extension}' for '{}'", path.display())]
    UnknownExtension { path: PathBuf, extension: String },

    /// Font base name too short to carry a 3-digit point size suffix.
    #[error("missing font size suffix in file name '{}'", path.display())]
    MissingFontSize { path: PathBuf },

    /// Font base name ends in something other than 3 ASCII digits.
    #[error("unparsable font size '{suffix}' in file name '{}'", path.display())]
    UnparsableFontSize { path: PathBuf, suffix: String },

    /// The backend could not decode the image.
    #[error("could not load texture '{}'", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The backend could not open the font.
    #[error("could not load font '{}'", path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Failure of the package resolver itself; the package loads nothing.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("unknown package '{0}'")]
    UnknownPackage(String),

    #[error("could not read package '{package}'")]
    Io {
        package: String,
        #[source]
        source: std::io::Error,
    },
}
