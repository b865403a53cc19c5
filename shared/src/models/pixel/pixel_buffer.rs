use crate::models::resolution::{Resolution, CHANNELS};

/// Alpha written with every pixel.
pub const OPAQUE: u8 = 0xff;

/// Row-major RGBA raster, one byte per channel.
///
/// The storage is allocated once and reused by every render that targets it;
/// it never grows or shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: Resolution,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a buffer of transparent black pixels.
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            data: vec![0; resolution.buffer_len()],
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.resolution.width() as usize + x as usize) * CHANNELS
    }

    /// RGBA quadruple at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.resolution.width() || y >= self.resolution.height() {
            return None;
        }
        let i = self.index(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Writes an opaque gray pixel at byte offset `index`.
    #[inline]
    pub fn put_gray(&mut self, index: usize, intensity: u8) {
        self.data[index..index + CHANNELS]
            .copy_from_slice(&[intensity, intensity, intensity, OPAQUE]);
    }

    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }
}
