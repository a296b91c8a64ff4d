use std::path::Path;

use crate::render::RenderBackend;

use super::{AssetError, PackageFile, RenderAsset};

/// Number of trailing base-name characters that encode a font's point size.
const FONT_SIZE_DIGITS: usize = 3;

/// Asset format selected from a file extension.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AssetFormat {
    Image,
    Font,
}

impl AssetFormat {
    /// Case-insensitive extension lookup; `None` for unsupported extensions.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "bmp" | "png" | "jpg" | "jpeg" | "gif" | "webp" => Some(AssetFormat::Image),
            "ttf" => Some(AssetFormat::Font),
            _ => None,
        }
    }
}

/// Loads one package file through the backend.
///
/// Returns the asset name alongside the resource so the caller can merge it
/// into the package entry.
pub fn load_render_asset(
    backend: &mut dyn RenderBackend,
    file: &PackageFile,
) -> Result<(String, RenderAsset), AssetError> {
    let path = file.path.as_path();
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

    let asset = match AssetFormat::from_extension(extension) {
        Some(AssetFormat::Image) => backend
            .load_texture(path)
            .map(RenderAsset::Texture)
            .map_err(|source| AssetError::Texture { path: path.to_owned(), source })?,
        Some(AssetFormat::Font) => {
            let point_size = parse_font_size(path)?;
            let font = backend
                .load_font(path, point_size)
                .map_err(|source| AssetError::Font { path: path.to_owned(), source })?;
            RenderAsset::Font { font, point_size }
        }
        None => {
            return Err(AssetError::UnknownExtension {
                path: path.to_owned(),
                extension: extension.to_owned(),
            });
        }
    };

    Ok((file.tag.name.clone(), asset))
}

/// Reads the point size encoded in the last three characters of a font's base name.
///
/// `title018.ttf` is an 18pt font. The base name needs a stem in front of the
/// size, so anything of three characters or fewer has no size at all.
pub fn parse_font_size(path: &Path) -> Result<u16, AssetError> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let chars: Vec<char> = stem.chars().collect();

    if chars.len() <= FONT_SIZE_DIGITS {
        return Err(AssetError::MissingFontSize { path: path.to_owned() });
    }

    let suffix: String = chars[chars.len() - FONT_SIZE_DIGITS..].iter().collect();
    if !suffix.chars().all(|c| c.is_ascii_digit()) {
        return Err(AssetError::UnparsableFontSize { path: path.to_owned(), suffix });
    }

    suffix
        .parse()
        .map_err(|_| AssetError::UnparsableFontSize { path: path.to_owned(), suffix })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetTag;
    use crate::render::RecordingBackend;

    fn file(path: &str, name: &str) -> PackageFile {
        PackageFile::new(path, AssetTag::new("default", name))
    }

    #[test]
    fn font_size_from_suffix() {
        assert_eq!(parse_font_size(Path::new("fonts/ui018.ttf")).unwrap(), 18);
        assert_eq!(parse_font_size(Path::new("Title120.ttf")).unwrap(), 120);
    }

    #[test]
    fn font_size_missing_when_base_name_too_short() {
        assert!(matches!(
            parse_font_size(Path::new("ui1.ttf")),
            Err(AssetError::MissingFontSize { .. })
        ));
        assert!(matches!(
            parse_font_size(Path::new("018.ttf")),
            Err(AssetError::MissingFontSize { .. })
        ));
    }

    #[test]
    fn font_size_unparsable_suffix() {
        match parse_font_size(Path::new("body+12.ttf")) {
            Err(AssetError::UnparsableFontSize { suffix, .. }) => assert_eq!(suffix, "+12"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_font_size(Path::new("regular.ttf")),
            Err(AssetError::UnparsableFontSize { .. })
        ));
    }

    #[test]
    fn extension_dispatch() {
        let mut backend = RecordingBackend::new()
            .with_texture("hero.PNG", 32, 32)
            .with_font("ui018.ttf");

        let (name, asset) = load_render_asset(&mut backend, &file("hero.PNG", "hero")).unwrap();
        assert_eq!(name, "hero");
        assert!(asset.texture().is_some());

        let (_, asset) = load_render_asset(&mut backend, &file("ui018.ttf", "ui")).unwrap();
        assert!(matches!(asset, RenderAsset::Font { point_size: 18, .. }));

        assert!(matches!(
            load_render_asset(&mut backend, &file("theme.wav", "theme")),
            Err(AssetError::UnknownExtension { extension, .. }) if extension == "wav"
        ));
    }

    #[test]
    fn backend_failure_is_a_load_error() {
        let mut backend = RecordingBackend::new();
        assert!(matches!(
            load_render_asset(&mut backend, &file("missing.png", "missing")),
            Err(AssetError::Texture { .. })
        ));
    }
}
