use serde::{Deserialize, Serialize};

use crate::{error::RenderError, result::RenderResult};

/// Bytes per pixel in every buffer this crate produces: R, G, B, A.
pub const CHANNELS: usize = 4;

/// Largest accepted side, in pixels.
pub const MAX_SIDE: u32 = 1 << 15;

/// Raster shape. Both sides are in `2..=MAX_SIDE` and the RGBA buffer length
/// fits in a `usize`; every constructor, deserialization included, goes
/// through [`Resolution::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResolution")]
pub struct Resolution {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawResolution {
    width: u32,
    height: u32,
}

impl TryFrom<RawResolution> for Resolution {
    type Error = RenderError;

    fn try_from(raw: RawResolution) -> RenderResult<Self> {
        Resolution::new(raw.width, raw.height)
    }
}

impl Resolution {
    /// The fixed 8K raster exposed through the host boundary.
    pub const FULL: Resolution = Resolution {
        width: 7680,
        height: 4320,
    };

    /// 1280x720, the viewer window.
    pub const HD: Resolution = Resolution {
        width: 1280,
        height: 720,
    };

    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let in_range = |side: u32| (2..=MAX_SIDE).contains(&side);
        let fits = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .is_some();

        if !in_range(width) || !in_range(height) || !fits {
            return Err(RenderError::InvalidResolution { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `height / width`, used to keep the imaginary extent proportionate.
    pub fn aspect(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn buffer_len(&self) -> usize {
        self.pixel_count() * CHANNELS
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::FULL
    }
}
