//! Foreign-callable boundary around the escape-time renderer.
//!
//! Two ways in:
//!
//! * `generate_mandelbrot` / `get_width` / `get_height`: a single process-wide
//!   renderer at the fixed 7680x4320 raster. The returned pointer stays valid
//!   until the next `generate_mandelbrot` call.
//! * `mandelbrot_renderer_new` .. `mandelbrot_renderer_free`: an opaque handle
//!   that owns its own buffer, for callers that need more than one.
//!
//! Rejected viewports (non-positive or non-finite zoom, non-finite offsets)
//! yield a null pointer and leave the buffer untouched.

pub mod handle;

use std::{
    ptr,
    sync::{Mutex, OnceLock},
};

use log::warn;
use shared::{
    models::{resolution::Resolution, viewport::Viewport},
    rendering::EscapeTimeRenderer,
};

pub use handle::MandelbrotHandle;

static GLOBAL_RENDERER: OnceLock<Mutex<EscapeTimeRenderer>> = OnceLock::new();

/// Renders the fixed raster and returns a pointer to `get_width() * get_height() * 4` bytes.
#[no_mangle]
pub extern "C" fn generate_mandelbrot(zoom: f64, offset_x: f64, offset_y: f64) -> *const u8 {
    let renderer = GLOBAL_RENDERER.get_or_init(|| Mutex::new(EscapeTimeRenderer::full()));
    let mut renderer = match renderer.lock() {
        Ok(renderer) => renderer,
        Err(poisoned) => poisoned.into_inner(),
    };
    render_raw(&mut renderer, zoom, offset_x, offset_y)
}

#[no_mangle]
pub extern "C" fn get_width() -> i32 {
    Resolution::FULL.width() as i32
}

#[no_mangle]
pub extern "C" fn get_height() -> i32 {
    Resolution::FULL.height() as i32
}

/// Installs the crate logger; useful when the library is loaded by a non-Rust host.
#[no_mangle]
pub extern "C" fn mandelbrot_init_logging() {
    shared::env::init();
    shared::logger::init();
}

pub(crate) fn render_raw(
    renderer: &mut EscapeTimeRenderer,
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
) -> *const u8 {
    match Viewport::new(zoom, offset_x, offset_y) {
        Ok(viewport) => renderer.render(&viewport).as_ptr(),
        Err(e) => {
            warn!("Render request rejected: {}", e);
            ptr::null()
        }
    }
}
