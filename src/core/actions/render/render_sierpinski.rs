use log::{debug, info};
use std::time::Instant;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::render::render_error::{RenderError, check_surface_fits};
use crate::core::data::triangle::Triangle;
use crate::core::data::viewport::check_dimensions;
use crate::core::fractals::sierpinski::fill_colour_map::SierpinskiFillColourMap;
use crate::core::fractals::sierpinski::generator::{FillState, check_depth, generate_sierpinski};
use crate::core::fractals::sierpinski::sierpinski_params::{SierpinskiParams, SierpinskiStyle};
use crate::core::ports::surface::Surface;

/// Renders a Sierpinski triangle inscribed in the square `width` x `width`
/// area at the surface origin.
pub fn render_sierpinski<S: Surface + ?Sized>(
    params: &SierpinskiParams,
    surface: &mut S,
) -> Result<(), RenderError> {
    let width = params.width;

    check_dimensions(width, width)?;
    check_depth(params.depth)?;
    check_surface_fits(surface, width, width)?;

    let started = Instant::now();
    let outer = Triangle::inscribed(f64::from(width), f64::from(width));
    let regions = generate_sierpinski(outer, params.depth)?;

    debug!(
        "sierpinski width={} depth={} style={:?} produced {} regions",
        width,
        params.depth,
        params.style,
        regions.len()
    );

    let colour_map = SierpinskiFillColourMap::new(params.foreground, params.background);

    match params.style {
        SierpinskiStyle::Filled => {
            for region in regions.iter() {
                if colour_map.paints(region.state) {
                    surface.write_region(&region.triangle, colour_map.map(region.state)?)?;
                }
            }
        }
        SierpinskiStyle::Outline => {
            // Centres first so their fill never covers an outline
            if colour_map.paints(FillState::Empty) {
                let background = colour_map.map(FillState::Empty)?;
                for region in regions.empty() {
                    surface.write_region(&region.triangle, background)?;
                }
            }

            let foreground = colour_map.map(FillState::Filled)?;
            for region in regions.filled() {
                surface.write_outline(&region.triangle, foreground)?;
            }
        }
    }

    info!(
        "rendered sierpinski {}x{} depth {} in {:?}",
        width,
        width,
        params.depth,
        started.elapsed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::point::Point;
    use crate::core::fractals::sierpinski::generator::DEPTH_CAP;

    fn render(params: &SierpinskiParams) -> PixelBuffer {
        let mut buffer = PixelBuffer::filled(params.width, params.width, Colour::WHITE);
        render_sierpinski(params, &mut buffer).unwrap();
        buffer
    }

    fn at(buffer: &PixelBuffer, x: u32, y: u32) -> Colour {
        buffer.pixel(Point { x, y }).unwrap()
    }

    #[test]
    fn test_depth_zero_paints_whole_triangle() {
        let buffer = render(&SierpinskiParams::new(64, 0));

        assert_eq!(at(&buffer, 32, 42), Colour::BLACK);
        assert_eq!(at(&buffer, 32, 1), Colour::BLACK);
        assert_eq!(at(&buffer, 0, 0), Colour::WHITE);
        assert_eq!(at(&buffer, 63, 0), Colour::WHITE);
    }

    #[test]
    fn test_depth_one_leaves_centre_untouched() {
        let buffer = render(&SierpinskiParams::new(64, 1));

        assert_eq!(at(&buffer, 32, 42), Colour::WHITE);
        assert_eq!(at(&buffer, 32, 21), Colour::BLACK);
        assert_eq!(at(&buffer, 16, 53), Colour::BLACK);
        assert_eq!(at(&buffer, 48, 53), Colour::BLACK);
    }

    #[test]
    fn test_background_paints_removed_centres() {
        let mut params = SierpinskiParams::new(64, 1);
        params.background = Some(Colour::opaque(0, 0, 255));

        let buffer = render(&params);

        assert_eq!(at(&buffer, 32, 42), Colour::opaque(0, 0, 255));
        assert_eq!(at(&buffer, 32, 21), Colour::BLACK);
    }

    #[test]
    fn test_outline_depth_zero_strokes_edges_only() {
        let buffer = render(&SierpinskiParams::new(64, 0).with_style(SierpinskiStyle::Outline));

        assert_eq!(at(&buffer, 32, 0), Colour::BLACK);
        assert_eq!(at(&buffer, 10, 63), Colour::BLACK);
        assert_eq!(at(&buffer, 63, 63), Colour::BLACK);
        assert_eq!(at(&buffer, 32, 42), Colour::WHITE);
    }

    #[test]
    fn test_outline_depth_one_traces_inner_edges() {
        let buffer = render(&SierpinskiParams::new(64, 1).with_style(SierpinskiStyle::Outline));

        assert_eq!(at(&buffer, 16, 32), Colour::BLACK);
        assert_eq!(at(&buffer, 32, 32), Colour::BLACK);
        assert_eq!(at(&buffer, 32, 21), Colour::WHITE);
        assert_eq!(at(&buffer, 32, 42), Colour::WHITE);
    }

    #[test]
    fn test_outline_keeps_edges_over_background() {
        let mut params = SierpinskiParams::new(64, 1).with_style(SierpinskiStyle::Outline);
        params.background = Some(Colour::opaque(0, 0, 255));

        let buffer = render(&params);

        assert_eq!(at(&buffer, 32, 42), Colour::opaque(0, 0, 255));
        assert_eq!(at(&buffer, 32, 32), Colour::BLACK);
    }

    #[test]
    fn test_depth_over_cap_fails_before_writing() {
        let mut buffer = PixelBuffer::filled(64, 64, Colour::WHITE);

        assert_eq!(
            render_sierpinski(&SierpinskiParams::new(64, DEPTH_CAP + 1), &mut buffer),
            Err(RenderError::DepthTooLarge {
                depth: DEPTH_CAP + 1,
                cap: DEPTH_CAP
            })
        );
        assert!(buffer.buffer().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_zero_width_fails() {
        let mut buffer = PixelBuffer::new(8, 8);

        assert_eq!(
            render_sierpinski(&SierpinskiParams::new(0, 2), &mut buffer),
            Err(RenderError::InvalidDimension {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn test_surface_smaller_than_square_fails() {
        let mut buffer = PixelBuffer::new(64, 32);

        assert!(matches!(
            render_sierpinski(&SierpinskiParams::new(64, 2), &mut buffer),
            Err(RenderError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let params = SierpinskiParams::new(128, 5);

        assert_eq!(render(&params), render(&params));
    }
}
