mod adapters;
mod controllers;
mod core;
mod presenters;

pub use controllers::cli::cli_controller::CliController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_parallel_rayon::generate_pixel_buffer_parallel_rayon;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::{
    ColourMap, ColourMapError,
};
pub use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render::render_error::RenderError;
pub use crate::core::actions::render::render_mandelbrot::render_mandelbrot;
pub use crate::core::actions::render::render_sierpinski::render_sierpinski;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::triangle::{Subdivision, Triangle, Vertex};
pub use crate::core::data::viewport::{MAX_PIXELS, Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    ESCAPE_RADIUS_SQUARED, EscapeResult, MAX_ITERATIONS_CAP, MandelbrotAlgorithm, MandelbrotError,
    evaluate,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::colour_mapping::map::{
    IN_SET_COLOUR, MandelbrotColourMap,
};
pub use crate::core::fractals::mandelbrot::mandelbrot_params::{
    DEFAULT_CENTER, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_REAL_SPAN, DEFAULT_WIDTH,
    ExecutionMode, MandelbrotParams,
};
pub use crate::core::fractals::sierpinski::generator::{
    DEPTH_CAP, FillRegion, FillState, SierpinskiError, SierpinskiRegions, generate_sierpinski,
};
pub use crate::core::fractals::sierpinski::sierpinski_params::{
    DEFAULT_DEPTH, DEFAULT_SIERPINSKI_WIDTH, SierpinskiParams, SierpinskiStyle,
};
pub use crate::core::ports::surface::{Surface, SurfaceError, commit_pixel_buffer};
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords as map_pixel,
};
