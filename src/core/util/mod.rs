pub mod calculate_row_tiles;
pub mod pixel_to_complex_coords;
