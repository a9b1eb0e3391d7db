use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::sierpinski::generator::FillState;

#[derive(Debug)]
pub struct SierpinskiFillColourMap {
    foreground: Colour,
    background: Option<Colour>,
}

impl SierpinskiFillColourMap {
    #[must_use]
    pub fn new(foreground: Colour, background: Option<Colour>) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Whether regions in `state` get painted at all.
    #[must_use]
    pub fn paints(&self, state: FillState) -> bool {
        match state {
            FillState::Filled => true,
            FillState::Empty => self.background.is_some(),
        }
    }
}

impl ColourMap<FillState> for SierpinskiFillColourMap {
    fn map(&self, state: FillState) -> Result<Colour, ColourMapError> {
        Ok(match state {
            FillState::Filled => self.foreground,
            FillState::Empty => self.background.unwrap_or(Colour::TRANSPARENT),
        })
    }

    fn display_name(&self) -> &str {
        "Sierpinski fill"
    }
}
