use log::debug;
use rayon::prelude::*;
use std::num::NonZeroU32;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, fill_rows,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::util::calculate_row_tiles::{
    calculate_row_tiles_for_available_threads, calculate_rows_per_tile,
};

/// Generates a pixel buffer using rayon's work-stealing scheduler.
///
/// The RGBA bytes are split into contiguous tiles of whole rows. Each worker
/// owns a disjoint slice, so no locking is needed and the result is identical
/// to the serial generator.
pub fn generate_pixel_buffer_parallel_rayon<Alg, CMap>(
    width: u32,
    height: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    Alg::Failure: Send,
{
    let mut buffer = PixelBuffer::new(width, height);
    let row_bytes = buffer.row_bytes();

    if row_bytes == 0 || height == 0 {
        return Ok(buffer);
    }

    let tiles = calculate_row_tiles_for_available_threads(height);
    let rows_per_tile =
        calculate_rows_per_tile(height, NonZeroU32::new(tiles).unwrap_or(NonZeroU32::MIN));

    debug!(
        "splitting {}x{} pixels into {} row tiles of {} rows",
        width, height, tiles, rows_per_tile
    );

    buffer
        .buffer_mut()
        .par_chunks_mut(rows_per_tile as usize * row_bytes)
        .enumerate()
        .try_for_each(|(tile, rows)| {
            fill_rows(tile as u32 * rows_per_tile, width, rows, algorithm, colour_map)
        })?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
    use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::tests::{
        StubColourMapFailure, StubColourMapSuccess, StubError, StubFailureAlgorithm,
        StubSuccessAlgorithm,
    };

    fn assert_matches_serial(width: u32, height: u32) {
        let algorithm = StubSuccessAlgorithm {};
        let colour_map = StubColourMapSuccess {};

        let serial = generate_pixel_buffer(width, height, &algorithm, &colour_map).unwrap();
        let parallel =
            generate_pixel_buffer_parallel_rayon(width, height, &algorithm, &colour_map).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        assert_matches_serial(11, 9);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        assert_matches_serial(1, 1);
    }

    #[test]
    fn test_rayon_with_single_row_and_single_column() {
        assert_matches_serial(37, 1);
        assert_matches_serial(1, 37);
    }

    #[test]
    fn test_rayon_with_uneven_row_distribution() {
        assert_matches_serial(4, 97);
    }

    #[test]
    fn test_rayon_with_large_rect() {
        assert_matches_serial(320, 240);
    }

    #[test]
    fn test_rayon_with_zero_area() {
        let buffer = generate_pixel_buffer_parallel_rayon(
            0,
            10,
            &StubSuccessAlgorithm {},
            &StubColourMapSuccess {},
        )
        .unwrap();

        assert_eq!(buffer.buffer_size(), 0);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let result = generate_pixel_buffer_parallel_rayon(
            3,
            4,
            &StubFailureAlgorithm {},
            &StubColourMapSuccess {},
        );

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::Algorithm(StubError {}))
        ));
    }

    #[test]
    fn test_rayon_propagates_colour_map_failure() {
        let result = generate_pixel_buffer_parallel_rayon(
            3,
            4,
            &StubSuccessAlgorithm {},
            &StubColourMapFailure {},
        );

        assert!(matches!(result, Err(GeneratePixelBufferError::ColourMap(_))));
    }
}
