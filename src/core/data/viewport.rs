use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Largest pixel count a single render may allocate (8192 x 8192).
pub const MAX_PIXELS: u64 = 8192 * 8192;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidDimension { width: u32, height: u32 },
    InvalidScale { scale: f64 },
    InvalidCenter { center: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "viewport size must be positive and at most {} pixels: {}x{}",
                    MAX_PIXELS, width, height
                )
            }
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be positive and finite: {}", scale)
            }
            Self::InvalidCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

pub fn check_dimensions(width: u32, height: u32) -> Result<(), ViewportError> {
    let size = u64::from(width) * u64::from(height);

    if width == 0 || height == 0 || size > MAX_PIXELS {
        return Err(ViewportError::InvalidDimension { width, height });
    }

    Ok(())
}

/// Maps a `width` x `height` pixel grid onto the complex plane.
///
/// `scale` is measured in plane units per pixel and `center` is the plane
/// point that lands on the geometric centre of the grid. The real axis grows
/// to the right and the imaginary axis grows upward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub center: Complex,
}

impl Viewport {
    pub fn new(width: u32, height: u32, scale: f64, center: Complex) -> Result<Self, ViewportError> {
        let viewport = Self {
            width,
            height,
            scale,
            center,
        };

        viewport.validate()?;
        Ok(viewport)
    }

    /// Builds a viewport whose horizontal extent covers `real_span` plane units.
    pub fn with_real_span(
        width: u32,
        height: u32,
        real_span: f64,
        center: Complex,
    ) -> Result<Self, ViewportError> {
        check_dimensions(width, height)?;
        Self::new(width, height, real_span / f64::from(width), center)
    }

    pub fn validate(&self) -> Result<(), ViewportError> {
        check_dimensions(self.width, self.height)?;

        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ViewportError::InvalidScale { scale: self.scale });
        }

        if !self.center.is_finite() {
            return Err(ViewportError::InvalidCenter {
                center: self.center,
            });
        }

        let (min, max) = self.bounds();

        if !(min.is_finite() && max.is_finite()) {
            return Err(ViewportError::InvalidScale { scale: self.scale });
        }

        Ok(())
    }

    /// Plane corners covered by the grid, as (bottom-left, top-right).
    #[must_use]
    pub fn bounds(&self) -> (Complex, Complex) {
        let half_width = f64::from(self.width) / 2.0 * self.scale;
        let half_height = f64::from(self.height) / 2.0 * self.scale;

        (
            Complex::new(self.center.real - half_width, self.center.imag - half_height),
            Complex::new(self.center.real + half_width, self.center.imag + half_height),
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
