pub mod fractal;
pub mod mandelbrot;
