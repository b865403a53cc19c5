use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{
    fractal::mandelbrot::MAX_ITERATIONS, resolution::Resolution, viewport::Viewport,
};

pub const DEFAULT_OUTPUT: &str = "mandelbrot.png";

/// Multiplier applied to the zoom per wheel notch.
pub const ZOOM_IN_FACTOR: f64 = 1.1;
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Parameters of a single image export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub max_iterations: u32,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            resolution: Resolution::FULL,
            max_iterations: MAX_ITERATIONS,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Parameters of the interactive window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Initial viewport, restored when the view is reset.
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub max_iterations: u32,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport {
                zoom: 1.0,
                offset_x: -0.5,
                offset_y: 0.0,
            },
            resolution: Resolution::HD,
            max_iterations: MAX_ITERATIONS,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}
