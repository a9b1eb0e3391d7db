pub mod generate_pixel_buffer;
pub mod generate_pixel_buffer_parallel_rayon;
pub mod ports;
