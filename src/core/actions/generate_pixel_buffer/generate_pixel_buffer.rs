use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError<AlgFailure> {
    Algorithm(AlgFailure),
    ColourMap(ColourMapError),
}

impl<AlgFailure: fmt::Display> fmt::Display for GeneratePixelBufferError<AlgFailure> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
        }
    }
}

impl<AlgFailure: Error + 'static> Error for GeneratePixelBufferError<AlgFailure> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => Some(err),
        }
    }
}

impl<AlgFailure> From<ColourMapError> for GeneratePixelBufferError<AlgFailure> {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

/// Computes and colours whole rows of RGBA bytes, starting at image row `first_row`.
pub(crate) fn fill_rows<Alg, CMap>(
    first_row: u32,
    width: u32,
    rows: &mut [u8],
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<(), GeneratePixelBufferError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let row_bytes = width as usize * BYTES_PER_PIXEL;

    if row_bytes == 0 {
        return Ok(());
    }

    for (offset, row) in rows.chunks_exact_mut(row_bytes).enumerate() {
        let y = first_row + offset as u32;

        for (x, rgba) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let value = algorithm
                .compute(Point { x: x as u32, y })
                .map_err(GeneratePixelBufferError::Algorithm)?;

            rgba.copy_from_slice(&colour_map.map(value)?.to_rgba());
        }
    }

    Ok(())
}

/// Generates a pixel buffer row by row on the calling thread.
///
/// This is the reference ordering; [`generate_pixel_buffer_parallel_rayon`]
/// must produce identical bytes.
///
/// [`generate_pixel_buffer_parallel_rayon`]: super::generate_pixel_buffer_parallel_rayon::generate_pixel_buffer_parallel_rayon
pub fn generate_pixel_buffer<Alg, CMap>(
    width: u32,
    height: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut buffer = PixelBuffer::new(width, height);

    fill_rows(0, width, buffer.buffer_mut(), algorithm, colour_map)?;

    Ok(buffer)
}
