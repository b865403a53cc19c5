pub mod renderer;
pub mod report;

pub use renderer::EscapeTimeRenderer;

use crate::models::{
    fractal::mandelbrot::{Mandelbrot, MAX_ITERATIONS},
    pixel::PixelBuffer,
    resolution::Resolution,
    viewport::Viewport,
};

/// One-shot render into a freshly allocated buffer owned by the caller.
pub fn render(viewport: &Viewport, resolution: Resolution) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(resolution);
    renderer::fill(&Mandelbrot::new(), MAX_ITERATIONS, viewport, &mut buffer);
    buffer
}
