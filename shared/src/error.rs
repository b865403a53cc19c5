use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    /// Zoom is not a positive finite number, or an offset is not finite.
    InvalidViewport {
        zoom: f64,
        offset_x: f64,
        offset_y: f64,
    },
    /// The plane mapping divides by `width - 1` and `height - 1`; the buffer
    /// must also be allocatable.
    InvalidResolution { width: u32, height: u32 },
    InvalidMaxIterations(u32),
    /// A caller supplied buffer does not match the renderer's raster.
    BufferSize { expected: usize, actual: usize },
    Image(image::ImageError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Window(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidViewport {
                zoom,
                offset_x,
                offset_y,
            } => write!(
                f,
                "invalid viewport: zoom={} offset=({}, {}), zoom must be positive and all values finite",
                zoom, offset_x, offset_y
            ),
            RenderError::InvalidResolution { width, height } => write!(
                f,
                "invalid resolution {}x{}: both dimensions must be between 2 and {}",
                width,
                height,
                crate::models::resolution::MAX_SIDE
            ),
            RenderError::InvalidMaxIterations(max) => {
                write!(f, "invalid iteration cap {}: must be at least 1", max)
            }
            RenderError::BufferSize { expected, actual } => write!(
                f,
                "pixel buffer holds {} bytes but the renderer expects {}",
                actual, expected
            ),
            RenderError::Image(e) => write!(f, "image error: {}", e),
            RenderError::Io(e) => write!(f, "I/O error: {}", e),
            RenderError::Json(e) => write!(f, "JSON error: {}", e),
            RenderError::Window(msg) => write!(f, "window error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Image(e) => Some(e),
            RenderError::Io(e) => Some(e),
            RenderError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Json(e)
    }
}

impl From<pixels::Error> for RenderError {
    fn from(e: pixels::Error) -> Self {
        RenderError::Window(e.to_string())
    }
}

impl From<winit::error::OsError> for RenderError {
    fn from(e: winit::error::OsError) -> Self {
        RenderError::Window(e.to_string())
    }
}
