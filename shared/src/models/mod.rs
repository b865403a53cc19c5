pub mod escape;
pub mod fractal;
pub mod pixel;
pub mod point;
pub mod range;
pub mod resolution;
pub mod viewport;
