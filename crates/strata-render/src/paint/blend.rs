/// How a blit combines with what is already in the target.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Blend {
    /// `src * a + dst * (1 - a)`.
    #[default]
    Transparent,
    /// `src * a + dst`. Always used by the glow pass.
    Additive,
    /// `src * dst`.
    Modulate,
    /// `src`, ignoring what was there.
    Overwrite,
}

impl Blend {
    pub const ALL: [Blend; 4] = [Blend::Transparent, Blend::Additive, Blend::Modulate, Blend::Overwrite];

    /// Dense index, used by backends that keep one pipeline per mode.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Blend::Transparent => 0,
            Blend::Additive => 1,
            Blend::Modulate => 2,
            Blend::Overwrite => 3,
        }
    }
}

/// Mirroring applied to the source texels of a blit.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Flip {
    #[inline]
    pub const fn horizontal(self) -> bool {
        matches!(self, Flip::Horizontal | Flip::Both)
    }

    #[inline]
    pub const fn vertical(self) -> bool {
        matches!(self, Flip::Vertical | Flip::Both)
    }

    #[inline]
    pub const fn from_axes(horizontal: bool, vertical: bool) -> Self {
        match (horizontal, vertical) {
            (false, false) => Flip::None,
            (true, false) => Flip::Horizontal,
            (false, true) => Flip::Vertical,
            (true, true) => Flip::Both,
        }
    }
}
