use log::warn;

use crate::{config::ViewerConfig, models::viewport::Viewport};

/// Navigation-relevant input, sampled once per batch of window events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavigationInput {
    /// `R` was pressed.
    pub reset: bool,
    /// Wheel delta in lines, positive away from the user.
    pub scroll: f32,
    /// Cursor position in raster pixels, `None` outside the frame.
    pub cursor: Option<(isize, isize)>,
    /// Left button is held.
    pub dragging: bool,
}

/// Turns viewer input into viewport changes: wheel zoom anchored at the
/// cursor, drag to pan, reset to the configured start.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: ViewerConfig,
    viewport: Viewport,
    drag_anchor: Option<(isize, isize)>,
}

impl Navigator {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            viewport: config.viewport,
            config,
            drag_anchor: None,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Applies one input sample. Returns the new viewport if it changed.
    pub fn update(&mut self, input: NavigationInput) -> Option<Viewport> {
        let before = self.viewport;

        if input.reset {
            self.viewport = self.config.viewport;
        }

        if let Some((x, y)) = input.cursor {
            if input.scroll != 0.0 {
                self.zoom(x, y, input.scroll);
            }
        }

        if input.dragging {
            if let Some(position) = input.cursor {
                self.drag_to(position);
            }
        } else {
            self.drag_anchor = None;
        }

        (self.viewport != before).then_some(self.viewport)
    }

    fn zoom(&mut self, x: isize, y: isize, scroll: f32) {
        let factor = if scroll > 0.0 {
            self.config.zoom_in_factor
        } else {
            self.config.zoom_out_factor
        };

        match self
            .viewport
            .zoom_at(self.config.resolution, x as f64, y as f64, factor)
        {
            Ok(viewport) => self.viewport = viewport,
            Err(e) => warn!("Zoom ignored: {}", e),
        }
    }

    fn drag_to(&mut self, (x, y): (isize, isize)) {
        if let Some((anchor_x, anchor_y)) = self.drag_anchor {
            let (dx, dy) = (x - anchor_x, y - anchor_y);
            if dx != 0 || dy != 0 {
                match self
                    .viewport
                    .pan(self.config.resolution, dx as f64, dy as f64)
                {
                    Ok(viewport) => self.viewport = viewport,
                    Err(e) => warn!("Pan ignored: {}", e),
                }
            }
        }
        self.drag_anchor = Some((x, y));
    }
}
