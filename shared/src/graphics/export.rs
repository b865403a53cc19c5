use std::path::Path;

use image::{ColorType, ImageFormat};
use log::{debug, info};

use crate::{models::pixel::PixelBuffer, result::RenderResult};

/// Encodes the buffer as an 8-bit RGBA PNG at `path`.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> RenderResult<()> {
    let resolution = buffer.resolution();
    debug!(
        "Encoding {}x{} PNG to {}",
        resolution.width(),
        resolution.height(),
        path.display()
    );

    image::save_buffer_with_format(
        path,
        buffer.as_bytes(),
        resolution.width(),
        resolution.height(),
        ColorType::Rgba8,
        ImageFormat::Png,
    )?;

    info!("Image written to {}", path.display());
    Ok(())
}
