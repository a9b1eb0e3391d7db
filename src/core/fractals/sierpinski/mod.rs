pub mod fill_colour_map;
pub mod generator;
pub mod sierpinski_params;
