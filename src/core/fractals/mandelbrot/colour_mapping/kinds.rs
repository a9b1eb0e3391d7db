use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    FireGradient,
    BlueWhiteGradient,
    ClassicPalette,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[
        Self::FireGradient,
        Self::BlueWhiteGradient,
        Self::ClassicPalette,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
            Self::ClassicPalette => "Classic palette",
        }
    }
}

impl fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}
