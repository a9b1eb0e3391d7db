use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    IN_SET_COLOUR, MandelbrotColourMap, check_escape_step,
};

#[derive(Debug)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap<EscapeResult> for MandelbrotBlueWhiteGradient {
    fn map(&self, value: EscapeResult) -> Result<Colour, ColourMapError> {
        let iterations = match value {
            EscapeResult::Bounded => return Ok(IN_SET_COLOUR),
            EscapeResult::Escaped(n) => check_escape_step(n, self.max_iterations)?,
        };

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let u = 1.0 - t;

        // Bernstein-style polynomials peak at different points of t
        let r = (9.0 * u * t * t * t * 255.0) as u8;
        let g = (15.0 * u * u * t * t * 255.0) as u8;
        let b = (8.5 * u * u * u * t * 255.0) as u8;

        Ok(Colour::opaque(r, g, b))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::BlueWhiteGradient
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
