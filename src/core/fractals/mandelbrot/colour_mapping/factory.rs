use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::blue_white_gradient::MandelbrotBlueWhiteGradient;
use crate::core::fractals::mandelbrot::colour_mapping::maps::classic_palette::MandelbrotClassicPalette;
use crate::core::fractals::mandelbrot::colour_mapping::maps::fire_gradient::MandelbrotFireGradient;

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::FireGradient => {
            Box::new(MandelbrotFireGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::BlueWhiteGradient => {
            Box::new(MandelbrotBlueWhiteGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::ClassicPalette => {
            Box::new(MandelbrotClassicPalette::new(max_iterations))
        }
    }
}
