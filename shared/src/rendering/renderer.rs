use std::time::Instant;

use complex_rs::complex::Complex;
use log::debug;

use crate::{
    error::RenderError,
    graphics::color::grayscale,
    models::{
        fractal::{
            fractal::Fractal,
            mandelbrot::{Mandelbrot, MAX_ITERATIONS},
        },
        pixel::PixelBuffer,
        resolution::Resolution,
        viewport::Viewport,
    },
    result::RenderResult,
};

/// Fills an owned RGBA buffer with the grayscale escape-time image of a viewport.
///
/// The buffer is allocated once, in the constructor, and overwritten by each
/// [`render`](EscapeTimeRenderer::render). The returned slice borrows the
/// renderer, so it cannot outlive the next render.
#[derive(Debug, Clone)]
pub struct EscapeTimeRenderer<F = Mandelbrot> {
    fractal: F,
    max_iterations: u32,
    buffer: PixelBuffer,
}

impl EscapeTimeRenderer {
    /// Mandelbrot renderer with the reference iteration cap.
    pub fn new(resolution: Resolution) -> Self {
        Self {
            fractal: Mandelbrot::new(),
            max_iterations: MAX_ITERATIONS,
            buffer: PixelBuffer::new(resolution),
        }
    }

    /// Mandelbrot renderer at the fixed host resolution.
    pub fn full() -> Self {
        Self::new(Resolution::FULL)
    }

    pub fn with_max_iterations(resolution: Resolution, max_iterations: u32) -> RenderResult<Self> {
        Self::with_fractal(Mandelbrot::new(), resolution, max_iterations)
    }
}

impl<F: Fractal> EscapeTimeRenderer<F> {
    pub fn with_fractal(
        fractal: F,
        resolution: Resolution,
        max_iterations: u32,
    ) -> RenderResult<Self> {
        if max_iterations == 0 {
            return Err(RenderError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self {
            fractal,
            max_iterations,
            buffer: PixelBuffer::new(resolution),
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.buffer.resolution()
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Contents of the last render (all zero before the first one).
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Renders `viewport` into the owned buffer and returns a view of exactly
    /// `width * height * 4` bytes.
    pub fn render(&mut self, viewport: &Viewport) -> &[u8] {
        fill(&self.fractal, self.max_iterations, viewport, &mut self.buffer);
        self.buffer.as_bytes()
    }

    /// Renders into a caller owned buffer, which must match this renderer's raster.
    pub fn render_into(&self, viewport: &Viewport, buffer: &mut PixelBuffer) -> RenderResult<()> {
        if buffer.resolution() != self.resolution() {
            return Err(RenderError::BufferSize {
                expected: self.resolution().buffer_len(),
                actual: buffer.len(),
            });
        }
        fill(&self.fractal, self.max_iterations, viewport, buffer);
        Ok(())
    }
}

/// Evaluates every pixel of `buffer` in raster order, top row first.
pub fn fill<F: Fractal>(
    fractal: &F,
    max_iterations: u32,
    viewport: &Viewport,
    buffer: &mut PixelBuffer,
) {
    let started = Instant::now();
    let resolution = buffer.resolution();
    let bounds = viewport.bounds(resolution);
    let (re_factor, im_factor) = viewport.steps(resolution);

    for y in 0..resolution.height() {
        let c_im = bounds.max_im() - y as f64 * im_factor;
        for x in 0..resolution.width() {
            let c_re = bounds.min_re() + x as f64 * re_factor;
            let sample = fractal.escape_time(Complex::new(c_re, c_im), max_iterations);

            let index = buffer.index(x, y);
            buffer.put_gray(index, grayscale(sample.iterations, max_iterations));
        }
    }

    debug!(
        "Rendered {}x{} at zoom={} offset=({}, {}) in {:?}",
        resolution.width(),
        resolution.height(),
        viewport.zoom,
        viewport.offset_x,
        viewport.offset_y,
        started.elapsed()
    );
}
