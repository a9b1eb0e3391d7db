use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_CENTER: Complex = Complex::new(-0.75, 0.0);
/// Width of the plane shown by the default view, in plane units.
pub const DEFAULT_REAL_SPAN: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Serial,
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotParams {
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub execution: ExecutionMode,
}

impl MandelbrotParams {
    #[must_use]
    pub fn new(viewport: Viewport, max_iterations: u32) -> Self {
        Self {
            viewport,
            max_iterations,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            execution: ExecutionMode::default(),
        }
    }

    #[must_use]
    pub fn with_colour_map(mut self, kind: MandelbrotColourMapKinds) -> Self {
        self.colour_map_kind = kind;
        self
    }

    #[must_use]
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        let viewport = Viewport::with_real_span(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            DEFAULT_REAL_SPAN,
            DEFAULT_CENTER,
        )
        .expect("default viewport is valid");

        Self::new(viewport, DEFAULT_MAX_ITERATIONS)
    }
}
