use std::ptr;

use log::warn;
use shared::{
    models::{resolution::Resolution, viewport::Viewport},
    rendering::EscapeTimeRenderer,
    result::RenderResult,
};

use crate::render_raw;

/// Heap renderer handed to foreign callers as an opaque pointer.
#[derive(Debug)]
pub struct MandelbrotHandle {
    renderer: EscapeTimeRenderer,
}

impl MandelbrotHandle {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            renderer: EscapeTimeRenderer::new(resolution),
        }
    }

    pub fn buffer_len(&self) -> usize {
        self.renderer.resolution().buffer_len()
    }

    pub fn render(&mut self, zoom: f64, offset_x: f64, offset_y: f64) -> RenderResult<&[u8]> {
        let viewport = Viewport::new(zoom, offset_x, offset_y)?;
        Ok(self.renderer.render(&viewport))
    }
}

impl Default for MandelbrotHandle {
    fn default() -> Self {
        Self::new(Resolution::FULL)
    }
}

/// Allocates a renderer at the fixed 7680x4320 raster. Release it with
/// [`mandelbrot_renderer_free`].
#[no_mangle]
pub extern "C" fn mandelbrot_renderer_new() -> *mut MandelbrotHandle {
    Box::into_raw(Box::default())
}

/// Allocates a renderer at a custom raster, or returns null if either side is
/// outside `2..=32768`.
#[no_mangle]
pub extern "C" fn mandelbrot_renderer_with_resolution(
    width: u32,
    height: u32,
) -> *mut MandelbrotHandle {
    match Resolution::new(width, height) {
        Ok(resolution) => Box::into_raw(Box::new(MandelbrotHandle::new(resolution))),
        Err(e) => {
            warn!("Renderer not created: {}", e);
            ptr::null_mut()
        }
    }
}

/// Renders into the handle's buffer and returns a pointer to its first byte,
/// or null for a null handle or a rejected viewport.
///
/// # Safety
///
/// `handle` must be null or a live pointer from one of the constructors above,
/// not used concurrently from another thread. The returned pointer is valid
/// for [`mandelbrot_buffer_len`] bytes until the next render or free.
#[no_mangle]
pub unsafe extern "C" fn mandelbrot_render(
    handle: *mut MandelbrotHandle,
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
) -> *const u8 {
    match handle.as_mut() {
        Some(handle) => render_raw(&mut handle.renderer, zoom, offset_x, offset_y),
        None => ptr::null(),
    }
}

/// Byte length of the handle's buffer, 0 for a null handle.
///
/// # Safety
///
/// `handle` must be null or a live pointer from one of the constructors above.
#[no_mangle]
pub unsafe extern "C" fn mandelbrot_buffer_len(handle: *const MandelbrotHandle) -> usize {
    handle.as_ref().map_or(0, MandelbrotHandle::buffer_len)
}

/// Releases a handle. Null is ignored.
///
/// # Safety
///
/// `handle` must be null or a pointer from one of the constructors above that
/// has not been freed yet. Pointers returned by [`mandelbrot_render`] dangle
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn mandelbrot_renderer_free(handle: *mut MandelbrotHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}
