use log::{debug, info};
use std::time::Instant;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_parallel_rayon::generate_pixel_buffer_parallel_rayon;
use crate::core::actions::render::render_error::{RenderError, check_surface_fits};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::mandelbrot_params::{ExecutionMode, MandelbrotParams};
use crate::core::ports::surface::{Surface, commit_pixel_buffer};

/// Renders the Mandelbrot set described by `params` onto `surface`.
///
/// Every parameter and the surface size are checked before any pixel is
/// written. The image is computed into an owned buffer first and then
/// committed with exactly one `write_pixel` per pixel, in row-major order.
pub fn render_mandelbrot<S: Surface + ?Sized>(
    params: &MandelbrotParams,
    surface: &mut S,
) -> Result<(), RenderError> {
    let viewport = params.viewport;
    viewport.validate()?;

    let algorithm = MandelbrotAlgorithm::new(viewport, params.max_iterations)?;
    check_surface_fits(surface, viewport.width, viewport.height)?;

    let colour_map = mandelbrot_colour_map_factory(params.colour_map_kind, params.max_iterations);

    debug!(
        "mandelbrot {}x{} center=({}, {}) scale={} max_iterations={} colour_map={} execution={:?}",
        viewport.width,
        viewport.height,
        viewport.center.real,
        viewport.center.imag,
        viewport.scale,
        params.max_iterations,
        params.colour_map_kind,
        params.execution
    );

    let started = Instant::now();

    let buffer = match params.execution {
        ExecutionMode::Serial => {
            generate_pixel_buffer(viewport.width, viewport.height, &algorithm, &colour_map)?
        }
        ExecutionMode::Parallel => generate_pixel_buffer_parallel_rayon(
            viewport.width,
            viewport.height,
            &algorithm,
            &colour_map,
        )?,
    };

    let computed = started.elapsed();
    commit_pixel_buffer(&buffer, surface)?;

    info!(
        "rendered mandelbrot {}x{} in {:?} (compute {:?})",
        viewport.width,
        viewport.height,
        started.elapsed(),
        computed
    );

    Ok(())
}
