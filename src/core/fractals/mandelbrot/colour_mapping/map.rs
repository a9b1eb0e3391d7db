use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Colour of points whose orbit never escaped.
pub const IN_SET_COLOUR: Colour = Colour::BLACK;

pub trait MandelbrotColourMap: ColourMap<EscapeResult> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<EscapeResult> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: EscapeResult) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Returns the escape step when it lies within `1..=max_iterations`.
pub(crate) fn check_escape_step(
    iterations: u32,
    max_iterations: u32,
) -> Result<u32, ColourMapError> {
    if iterations > max_iterations {
        return Err(ColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(iterations)
}
