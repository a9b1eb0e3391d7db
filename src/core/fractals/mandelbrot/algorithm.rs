use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use std::error::Error;
use std::fmt;

/// An orbit has escaped once `|z|^2` exceeds this.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

pub const MAX_ITERATIONS_CAP: u32 = 100_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeResult {
    /// The 1-based step at which the orbit left the escape radius.
    Escaped(u32),
    Bounded,
}

/// Iterates `z <- z^2 + c` from `z = 0` for at most `max_iterations` steps.
#[must_use]
pub fn evaluate(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut real = 0.0_f64;
    let mut imag = 0.0_f64;

    for step in 1..=max_iterations {
        let real_squared = real * real;
        let imag_squared = imag * imag;

        imag = 2.0 * real * imag + c.imag;
        real = real_squared - imag_squared + c.real;

        if real * real + imag * imag > ESCAPE_RADIUS_SQUARED {
            return EscapeResult::Escaped(step);
        }
    }

    EscapeResult::Bounded
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MandelbrotError {
    IterationsTooLarge { iterations: u32, cap: u32 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsTooLarge { iterations, cap } => {
                write!(
                    f,
                    "maximum iterations {} exceeds the cap of {}",
                    iterations, cap
                )
            }
        }
    }
}

impl Error for MandelbrotError {}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(viewport: Viewport, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations > MAX_ITERATIONS_CAP {
            return Err(MandelbrotError::IterationsTooLarge {
                iterations: max_iterations,
                cap: MAX_ITERATIONS_CAP,
            });
        }

        Ok(Self {
            viewport,
            max_iterations,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, &self.viewport)?;

        Ok(evaluate(c, self.max_iterations))
    }
}
