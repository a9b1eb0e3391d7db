pub mod mandelbrot;
pub mod sierpinski;
