use crate::core::data::colour::Colour;

pub const DEFAULT_SIERPINSKI_WIDTH: u32 = 512;
pub const DEFAULT_DEPTH: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SierpinskiStyle {
    /// Solid leaf triangles.
    #[default]
    Filled,
    /// Edges of every leaf triangle, which together trace every level of the subdivision.
    Outline,
}

/// Parameters for a Sierpinski render over a square `width` x `width` area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SierpinskiParams {
    pub width: u32,
    pub depth: u32,
    pub style: SierpinskiStyle,
    pub foreground: Colour,
    /// Colour for removed centres. `None` leaves them untouched.
    pub background: Option<Colour>,
}

impl SierpinskiParams {
    #[must_use]
    pub fn new(width: u32, depth: u32) -> Self {
        Self {
            width,
            depth,
            style: SierpinskiStyle::default(),
            foreground: Colour::BLACK,
            background: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: SierpinskiStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for SierpinskiParams {
    fn default() -> Self {
        Self::new(DEFAULT_SIERPINSKI_WIDTH, DEFAULT_DEPTH)
    }
}
