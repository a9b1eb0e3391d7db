use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelToComplexCoordsError {
    PointOutsideViewport { point: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideViewport {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} viewport",
                    point.x, point.y, width, height
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Samples the centre of `pixel` on the viewport's plane.
pub fn pixel_to_complex_coords(
    pixel: Point,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !viewport.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideViewport {
            point: pixel,
            width: viewport.width,
            height: viewport.height,
        });
    }

    let offset_x = f64::from(pixel.x) + 0.5 - f64::from(viewport.width) / 2.0;
    let offset_y = f64::from(pixel.y) + 0.5 - f64::from(viewport.height) / 2.0;

    Ok(Complex {
        real: viewport.center.real + offset_x * viewport.scale,
        imag: viewport.center.imag - offset_y * viewport.scale,
    })
}
