use crate::assets::AssetTag;
use crate::paint::Color;
use crate::scene::{RenderDescriptor, RenderLayeredMessage, Transform};

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum JustifyHorizontal {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum JustifyVertical {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Placement of rendered text inside its transform's box.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Justification {
    /// Drawn from the box's top-left; optionally wrapped to the box width.
    Unjustified { wrapped: bool },
    /// Single line positioned inside the box.
    Justified(JustifyHorizontal, JustifyVertical),
}

impl Default for Justification {
    fn default() -> Self {
        Justification::Unjustified { wrapped: false }
    }
}

/// A run of text drawn with a font asset.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDescriptor {
    pub transform: Transform,
    pub text: String,
    pub font: AssetTag,
    pub color: Color,
    pub justification: Justification,
}

impl TextDescriptor {
    pub fn new(transform: Transform, text: impl Into<String>, font: AssetTag) -> Self {
        Self {
            transform,
            text: text.into(),
            font,
            color: Color::WHITE,
            justification: Justification::default(),
        }
    }
}

impl RenderLayeredMessage {
    pub fn text(text: TextDescriptor) -> Self {
        Self::new(
            text.transform.elevation,
            text.transform.origin().y,
            text.font.clone(),
            RenderDescriptor::Text(text),
        )
    }
}
