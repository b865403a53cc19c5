use serde::{Deserialize, Serialize};

use crate::models::{pixel::PixelBuffer, resolution::Resolution, viewport::Viewport};

/// Summary of a finished render, printed by `mandel render --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderReport {
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub max_iterations: u32,
    /// Pixels whose orbit reached the iteration cap (rendered white).
    pub interior_pixels: usize,
    pub elapsed_ms: u64,
}

impl RenderReport {
    pub fn new(
        viewport: Viewport,
        buffer: &PixelBuffer,
        max_iterations: u32,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            viewport,
            resolution: buffer.resolution(),
            max_iterations,
            interior_pixels: count_interior(buffer),
            elapsed_ms,
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

fn count_interior(buffer: &PixelBuffer) -> usize {
    buffer.pixels().filter(|pixel| pixel[0] == u8::MAX).count()
}
