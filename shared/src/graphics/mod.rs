#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod color;
pub mod export;
pub mod navigation;

use std::sync::{Arc, Mutex};
use std::time::Instant;

use error_iter::ErrorIter as _;
use log::{debug, error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use tokio::sync::watch;
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use self::{
    color::gray_rgba,
    navigation::{NavigationInput, Navigator},
};
use crate::{
    config::ViewerConfig,
    models::viewport::Viewport,
    rendering::EscapeTimeRenderer,
    result::RenderResult,
};

const LEFT_BUTTON: usize = 0;

/// Window state. Each viewport change is published on `viewport_tx` and
/// picked up by the render task.
struct World {
    navigator: Navigator,
    frame: Arc<Mutex<Vec<u8>>>,
    viewport_tx: watch::Sender<Viewport>,
}

/// Opens the viewer window and runs its event loop until it is closed.
///
/// Frames are rendered on a blocking thread; the window keeps showing the
/// previous frame until the next one is ready.
pub async fn start_viewer(config: ViewerConfig) -> RenderResult<()> {
    let renderer =
        EscapeTimeRenderer::with_max_iterations(config.resolution, config.max_iterations)?;
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let frame: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let (viewport_tx, viewport_rx) = watch::channel(config.viewport);
    tokio::spawn(render_frames(renderer, viewport_rx, Arc::clone(&frame)));

    let mut world = World::new(config, viewport_tx, frame);
    let resolution = world.navigator.config().resolution;

    let window = {
        let size = LogicalSize::new(resolution.width() as f64, resolution.height() as f64);
        WindowBuilder::new()
            .with_title("Mandelbrot")
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(resolution.width(), resolution.height(), surface_texture)?
    };

    let start = world.navigator.viewport();
    info!(
        "Viewer {}x{} at zoom={} offset=({}, {}): scroll to zoom, drag to pan, R to reset",
        resolution.width(),
        resolution.height(),
        start.zoom,
        start.offset_x,
        start.offset_y
    );

    event_loop.run(move |event, _, control_flow| {
        // Draw the current frame
        if let Event::RedrawRequested(_) = event {
            world.draw(pixels.frame_mut());
            if let Err(err) = pixels.render() {
                log_error("pixels.render", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Handle input events
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Resize the window
            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            let cursor = input
                .mouse()
                .and_then(|position| pixels.window_pos_to_pixel(position).ok())
                .map(|(x, y)| (x as isize, y as isize));

            world.update(&input, cursor);
            window.request_redraw();
        }
    });
}

/// Renders every viewport published on `viewport_rx`. Only the latest one
/// matters: viewports sent while a frame is being computed are coalesced.
async fn render_frames(
    mut renderer: EscapeTimeRenderer,
    mut viewport_rx: watch::Receiver<Viewport>,
    frame: Arc<Mutex<Vec<u8>>>,
) {
    loop {
        let viewport = *viewport_rx.borrow_and_update();
        let started = Instant::now();

        let rendered = tokio::task::spawn_blocking(move || {
            renderer.render(&viewport);
            renderer
        })
        .await;

        renderer = match rendered {
            Ok(renderer) => renderer,
            Err(e) => {
                error!("Render task failed: {}", e);
                return;
            }
        };
        debug!("Frame ready in {:?}", started.elapsed());

        match frame.lock() {
            Ok(mut current) => {
                current.clear();
                current.extend_from_slice(renderer.buffer().as_bytes());
            }
            Err(e) => {
                error!("Frame lock poisoned: {}", e);
                return;
            }
        }

        if viewport_rx.changed().await.is_err() {
            debug!("Viewer closed, stopping render task");
            return;
        }
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

impl World {
    fn new(
        config: ViewerConfig,
        viewport_tx: watch::Sender<Viewport>,
        frame: Arc<Mutex<Vec<u8>>>,
    ) -> Self {
        Self {
            navigator: Navigator::new(config),
            frame,
            viewport_tx,
        }
    }

    fn update(&mut self, input: &WinitInputHelper, cursor: Option<(isize, isize)>) {
        let sample = NavigationInput {
            reset: input.key_pressed(VirtualKeyCode::R),
            scroll: input.scroll_diff(),
            cursor,
            dragging: input.mouse_held(LEFT_BUTTON),
        };

        if let Some(viewport) = self.navigator.update(sample) {
            self.publish(viewport);
        }
    }

    fn publish(&self, viewport: Viewport) {
        debug!(
            "Viewport: zoom={} offset=({}, {})",
            viewport.zoom, viewport.offset_x, viewport.offset_y
        );
        if self.viewport_tx.send(viewport).is_err() {
            warn!("Render task is gone, viewport change dropped");
        }
    }

    fn draw(&self, frame: &mut [u8]) {
        let rendered = match self.frame.lock() {
            Ok(rendered) => rendered,
            Err(_) => return,
        };

        if rendered.len() == frame.len() {
            frame.copy_from_slice(&rendered);
        } else {
            for pixel in frame.chunks_exact_mut(4) {
                pixel.copy_from_slice(&gray_rgba(0));
            }
        }
    }
}
