/// An 8-bit RGBA colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[must_use]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sets_full_alpha() {
        let colour = Colour::opaque(1, 2, 3);

        assert_eq!(colour.to_rgba(), [1, 2, 3, 255]);
        assert!(!colour.is_transparent());
    }

    #[test]
    fn test_transparent_has_zero_alpha() {
        assert!(Colour::TRANSPARENT.is_transparent());
    }

    #[test]
    fn test_rgba_conversion_is_lossless() {
        let colour = Colour {
            r: 10,
            g: 20,
            b: 30,
            a: 40,
        };

        assert_eq!(Colour::from_rgba(colour.to_rgba()), colour);
    }
}
