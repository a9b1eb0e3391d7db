use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    IN_SET_COLOUR, MandelbrotColourMap, check_escape_step,
};

/// Sixteen bands running from black through blue to red.
pub const CLASSIC_PALETTE: [Colour; 16] = [
    Colour::opaque(0, 0, 0),
    Colour::opaque(0, 0, 32),
    Colour::opaque(0, 0, 64),
    Colour::opaque(0, 0, 92),
    Colour::opaque(0, 0, 128),
    Colour::opaque(0, 0, 160),
    Colour::opaque(0, 0, 192),
    Colour::opaque(0, 0, 224),
    Colour::opaque(0, 0, 255),
    Colour::opaque(32, 0, 224),
    Colour::opaque(64, 0, 192),
    Colour::opaque(128, 0, 160),
    Colour::opaque(160, 0, 128),
    Colour::opaque(192, 0, 96),
    Colour::opaque(224, 0, 64),
    Colour::opaque(255, 0, 0),
];

/// Cycles through [`CLASSIC_PALETTE`] by escape step, independent of zoom depth.
#[derive(Debug)]
pub struct MandelbrotClassicPalette {
    max_iterations: u32,
}

impl ColourMap<EscapeResult> for MandelbrotClassicPalette {
    fn map(&self, value: EscapeResult) -> Result<Colour, ColourMapError> {
        match value {
            EscapeResult::Bounded => Ok(IN_SET_COLOUR),
            EscapeResult::Escaped(n) => {
                let iterations = check_escape_step(n, self.max_iterations)?;
                Ok(CLASSIC_PALETTE[iterations as usize % CLASSIC_PALETTE.len()])
            }
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotClassicPalette {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::ClassicPalette
    }
}

impl MandelbrotClassicPalette {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
