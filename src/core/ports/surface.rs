use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::triangle::{Triangle, Vertex};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SurfaceError {
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    RegionOutOfBounds {
        region: Triangle,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} is outside the {}x{} surface",
                    x, y, width, height
                )
            }
            Self::RegionOutOfBounds {
                region,
                width,
                height,
            } => {
                write!(
                    f,
                    "region ({}, {}) ({}, {}) ({}, {}) is outside the {}x{} surface",
                    region.a.x,
                    region.a.y,
                    region.b.x,
                    region.b.y,
                    region.c.x,
                    region.c.y,
                    width,
                    height
                )
            }
        }
    }
}

impl Error for SurfaceError {}

pub fn check_region(region: &Triangle, width: u32, height: u32) -> Result<(), SurfaceError> {
    if !region.fits_within(width, height) {
        return Err(SurfaceError::RegionOutOfBounds {
            region: *region,
            width,
            height,
        });
    }

    Ok(())
}

/// The drawing target a renderer commits colour to.
///
/// Renderers borrow a surface for one call only. Writes outside the surface
/// fail instead of touching neighbouring memory.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn write_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), SurfaceError>;

    /// Fills every pixel whose centre the triangle covers.
    ///
    /// The region is checked against the surface before the first write, so a
    /// rejected region leaves the surface untouched.
    fn write_region(&mut self, region: &Triangle, colour: Colour) -> Result<(), SurfaceError> {
        let (width, height) = (self.width(), self.height());
        check_region(region, width, height)?;

        let (min_x, min_y, max_x, max_y) = region.bounding_box();
        let x_start = min_x.floor() as u32;
        let y_start = min_y.floor() as u32;
        let x_end = (max_x.ceil() as u32).min(width);
        let y_end = (max_y.ceil() as u32).min(height);

        for y in y_start..y_end {
            for x in x_start..x_end {
                let sample = Vertex::new(f64::from(x) + 0.5, f64::from(y) + 0.5);

                if region.covers(sample) {
                    self.write_pixel(x, y, colour)?;
                }
            }
        }

        Ok(())
    }

    /// Strokes the three edges of the triangle, one pixel wide.
    ///
    /// Edge points on the far surface boundary land in the last row or column.
    fn write_outline(&mut self, region: &Triangle, colour: Colour) -> Result<(), SurfaceError> {
        let (width, height) = (self.width(), self.height());
        check_region(region, width, height)?;

        if width == 0 || height == 0 {
            return Ok(());
        }

        for (from, to) in [(region.a, region.b), (region.b, region.c), (region.c, region.a)] {
            let (dx, dy) = (to.x - from.x, to.y - from.y);
            let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;

            for step in 0..=steps {
                let t = f64::from(step) / f64::from(steps);
                let x = ((from.x + dx * t).floor() as u32).min(width - 1);
                let y = ((from.y + dy * t).floor() as u32).min(height - 1);

                self.write_pixel(x, y, colour)?;
            }
        }

        Ok(())
    }
}

/// Writes a finished buffer to the surface, one pixel at a time in row-major order.
pub fn commit_pixel_buffer<S: Surface + ?Sized>(
    buffer: &PixelBuffer,
    surface: &mut S,
) -> Result<(), SurfaceError> {
    let width = buffer.width();

    if width == 0 {
        return Ok(());
    }

    for (index, rgba) in buffer.buffer().chunks_exact(4).enumerate() {
        let x = (index % width as usize) as u32;
        let y = (index / width as usize) as u32;

        surface.write_pixel(x, y, Colour::from_rgba([rgba[0], rgba[1], rgba[2], rgba[3]]))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        width: u32,
        height: u32,
        writes: HashMap<(u32, u32), usize>,
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn write_pixel(&mut self, x: u32, y: u32, _: Colour) -> Result<(), SurfaceError> {
            *self.writes.entry((x, y)).or_default() += 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_region_only_writes_covered_pixels() {
        let mut surface = RecordingSurface {
            width: 4,
            height: 4,
            ..Default::default()
        };
        let region = Triangle::new(
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(0.0, 4.0),
        );

        surface.write_region(&region, Colour::BLACK).unwrap();

        // 3 + 2 + 1, samples on the hypotenuse belong to the neighbouring triangle
        assert_eq!(surface.writes.len(), 6);
        assert!(surface.writes.values().all(|&count| count == 1));
        assert!(surface.writes.contains_key(&(0, 0)));
        assert!(!surface.writes.contains_key(&(3, 3)));
    }

    #[test]
    fn test_write_region_outside_surface_fails_without_writing() {
        let mut surface = RecordingSurface {
            width: 4,
            height: 4,
            ..Default::default()
        };
        let region = Triangle::new(
            Vertex::new(0.0, 0.0),
            Vertex::new(5.0, 0.0),
            Vertex::new(0.0, 4.0),
        );

        let result = surface.write_region(&region, Colour::BLACK);

        assert_eq!(
            result,
            Err(SurfaceError::RegionOutOfBounds {
                region,
                width: 4,
                height: 4
            })
        );
        assert!(surface.writes.is_empty());
    }

    #[test]
    fn test_write_outline_strokes_edges_only() {
        let mut surface = RecordingSurface {
            width: 4,
            height: 4,
            ..Default::default()
        };
        let region = Triangle::new(
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(0.0, 4.0),
        );

        surface.write_outline(&region, Colour::BLACK).unwrap();

        assert_eq!(surface.writes.len(), 10);
        assert!(surface.writes.contains_key(&(3, 0)));
        assert!(surface.writes.contains_key(&(2, 2)));
        assert!(surface.writes.contains_key(&(0, 3)));
        assert!(!surface.writes.contains_key(&(1, 1)));
    }

    #[test]
    fn test_write_outline_outside_surface_fails_without_writing() {
        let mut surface = RecordingSurface {
            width: 4,
            height: 4,
            ..Default::default()
        };
        let region = Triangle::new(
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(0.0, 6.0),
        );

        assert!(matches!(
            surface.write_outline(&region, Colour::BLACK),
            Err(SurfaceError::RegionOutOfBounds { .. })
        ));
        assert!(surface.writes.is_empty());
    }

    #[test]
    fn test_commit_pixel_buffer_writes_each_pixel_once() {
        let buffer = PixelBuffer::new(3, 2);
        let mut surface = RecordingSurface {
            width: 3,
            height: 2,
            ..Default::default()
        };

        commit_pixel_buffer(&buffer, &mut surface).unwrap();

        assert_eq!(surface.writes.len(), 6);
        assert!(surface.writes.values().all(|&count| count == 1));
    }
}
