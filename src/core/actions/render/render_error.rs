use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMapError;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{MAX_PIXELS, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotError;
use crate::core::fractals::sierpinski::generator::SierpinskiError;
use crate::core::ports::surface::{Surface, SurfaceError};
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderError {
    InvalidDimension {
        width: u32,
        height: u32,
    },
    InvalidScale {
        scale: f64,
    },
    InvalidCenter {
        center: Complex,
    },
    InvalidCoordinate {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    DepthTooLarge {
        depth: u32,
        cap: u32,
    },
    IterationsTooLarge {
        iterations: u32,
        cap: u32,
    },
    OutOfBounds(SurfaceError),
    EmptyViewport {
        width: u32,
        height: u32,
    },
    ColourMap(ColourMapError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "invalid dimensions {}x{}: both must be positive with at most {} pixels",
                    width, height, MAX_PIXELS
                )
            }
            Self::InvalidScale { scale } => {
                write!(f, "invalid scale {}: must be positive and finite", scale)
            }
            Self::InvalidCenter { center } => {
                write!(
                    f,
                    "invalid center ({}, {}): both components must be finite",
                    center.real, center.imag
                )
            }
            Self::InvalidCoordinate {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel ({}, {}) is outside the {}x{} viewport",
                    x, y, width, height
                )
            }
            Self::DepthTooLarge { depth, cap } => {
                write!(f, "depth {} exceeds the cap of {}", depth, cap)
            }
            Self::IterationsTooLarge { iterations, cap } => {
                write!(
                    f,
                    "maximum iterations {} exceeds the cap of {}",
                    iterations, cap
                )
            }
            Self::OutOfBounds(err) => write!(f, "surface out of bounds: {}", err),
            Self::EmptyViewport { width, height } => {
                write!(f, "surface {}x{} has no pixels to draw on", width, height)
            }
            Self::ColourMap(err) => write!(f, "colour mapping failed: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfBounds(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for RenderError {
    fn from(err: ViewportError) -> Self {
        match err {
            ViewportError::InvalidDimension { width, height } => {
                Self::InvalidDimension { width, height }
            }
            ViewportError::InvalidScale { scale } => Self::InvalidScale { scale },
            ViewportError::InvalidCenter { center } => Self::InvalidCenter { center },
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        match err {
            PixelToComplexCoordsError::PointOutsideViewport {
                point,
                width,
                height,
            } => Self::InvalidCoordinate {
                x: point.x,
                y: point.y,
                width,
                height,
            },
        }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        match err {
            MandelbrotError::IterationsTooLarge { iterations, cap } => {
                Self::IterationsTooLarge { iterations, cap }
            }
        }
    }
}

impl From<SierpinskiError> for RenderError {
    fn from(err: SierpinskiError) -> Self {
        match err {
            SierpinskiError::DepthTooLarge { depth, cap } => Self::DepthTooLarge { depth, cap },
        }
    }
}

impl From<SurfaceError> for RenderError {
    fn from(err: SurfaceError) -> Self {
        Self::OutOfBounds(err)
    }
}

impl From<ColourMapError> for RenderError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl<AlgFailure: Into<RenderError>> From<GeneratePixelBufferError<AlgFailure>> for RenderError {
    fn from(err: GeneratePixelBufferError<AlgFailure>) -> Self {
        match err {
            GeneratePixelBufferError::Algorithm(err) => err.into(),
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
        }
    }
}

/// Checks that `surface` can hold a `width` x `height` render anchored at the origin.
pub(crate) fn check_surface_fits<S: Surface + ?Sized>(
    surface: &S,
    width: u32,
    height: u32,
) -> Result<(), RenderError> {
    let (surface_width, surface_height) = (surface.width(), surface.height());

    if surface_width == 0 || surface_height == 0 {
        return Err(RenderError::EmptyViewport {
            width: surface_width,
            height: surface_height,
        });
    }

    if surface_width < width || surface_height < height {
        return Err(RenderError::OutOfBounds(SurfaceError::PixelOutOfBounds {
            x: width - 1,
            y: height - 1,
            width: surface_width,
            height: surface_height,
        }));
    }

    Ok(())
}
